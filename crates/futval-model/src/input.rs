use serde::{Deserialize, Serialize};

/// The three numeric inputs to the future-value calculation, already
/// validated and parsed.
///
/// Invariant: values come from a form whose three fields all passed
/// validation. The calculator trusts this and never re-validates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FutureValueInput {
    /// Amount deposited at the start of every month, in currency units.
    pub monthly_investment: f64,
    /// Nominal annual interest rate as a percentage (`8.5` means 8.5%).
    pub annual_rate_percent: f64,
    /// Term of the investment in whole years.
    pub years: i32,
}
