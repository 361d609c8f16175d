//! Future value of a level monthly deposit.

const MONTHS_PER_YEAR: i64 = 12;

/// Future value of `monthly_investment` deposited at the start of every
/// month for `years` years, compounding monthly at the nominal annual rate
/// `annual_rate_percent` (so `8.5` means 8.5% per year).
///
/// The accumulation is annuity-due: each period the deposit is added first
/// and the whole balance then earns that period's interest. The iterative
/// month-by-month loop below is the authoritative definition of the result;
/// the closed-form annuity sum agrees with it to double precision but the
/// loop fixes the exact sequence of roundings.
///
/// `years <= 0` runs zero periods and returns exactly `0.0`. A zero rate
/// degenerates to the plain sum of the deposits. Inputs are trusted to have
/// passed validation; there are no defensive checks here.
pub fn future_value(monthly_investment: f64, annual_rate_percent: f64, years: i32) -> f64 {
    let monthly_rate = annual_rate_percent / 100.0 / 12.0;
    let months = i64::from(years) * MONTHS_PER_YEAR;

    let mut balance = 0.0;
    for _ in 0..months {
        balance = (balance + monthly_investment) * (1.0 + monthly_rate);
    }
    balance
}
