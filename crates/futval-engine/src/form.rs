//! The whole-form contract consumed by presentation hosts.
//!
//! A host reads three raw strings from its input fields, calls
//! [`check_form`] to get one tagged result per field (so all failures can
//! be rendered simultaneously), and calls the calculator only when the
//! report carries zero failures. [`evaluate`] bundles those two steps for
//! hosts that just want a number or the list of messages.

use serde::{Deserialize, Serialize};

use futval_model::{labels, FutureValueInput, ValidationError};

use crate::financial::future_value;
use crate::validate::{check_decimal, check_integer};

/// The three fields of the future-value form, as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FutureValueForm {
    pub monthly_investment: String,
    pub yearly_interest_rate: String,
    pub years: String,
}

/// Per-field validation outcomes for one form submission.
///
/// Each field carries its parsed value on success, so building a
/// [`FutureValueInput`] from a fully valid report re-parses nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct FormReport {
    pub monthly_investment: Result<f64, ValidationError>,
    pub yearly_interest_rate: Result<f64, ValidationError>,
    pub years: Result<i32, ValidationError>,
}

impl FormReport {
    /// True when every field passed.
    pub fn is_valid(&self) -> bool {
        self.monthly_investment.is_ok() && self.yearly_interest_rate.is_ok() && self.years.is_ok()
    }

    /// The validated numeric inputs, when the whole form is valid.
    pub fn input(&self) -> Option<FutureValueInput> {
        Some(FutureValueInput {
            monthly_investment: *self.monthly_investment.as_ref().ok()?,
            annual_rate_percent: *self.yearly_interest_rate.as_ref().ok()?,
            years: *self.years.as_ref().ok()?,
        })
    }

    /// All failures, in field order, for simultaneous display.
    pub fn errors(&self) -> Vec<ValidationError> {
        [
            self.monthly_investment.as_ref().err(),
            self.yearly_interest_rate.as_ref().err(),
            self.years.as_ref().err(),
        ]
        .into_iter()
        .flatten()
        .cloned()
        .collect()
    }
}

/// Runs the most specific applicable check on each field.
///
/// Every field is validated independently; no failure short-circuits the
/// others. The format checks enforce presence internally, so callers never
/// need a separate presence pass per field.
pub fn check_form(form: &FutureValueForm) -> FormReport {
    FormReport {
        monthly_investment: check_decimal(labels::MONTHLY_INVESTMENT, &form.monthly_investment),
        yearly_interest_rate: check_decimal(
            labels::YEARLY_INTEREST_RATE,
            &form.yearly_interest_rate,
        ),
        years: check_integer(labels::YEARS, &form.years),
    }
}

/// Validates the form and, only when zero failures exist, computes the
/// future value.
pub fn evaluate(form: &FutureValueForm) -> Result<f64, Vec<ValidationError>> {
    let report = check_form(form);
    match report.input() {
        Some(input) => Ok(future_value(
            input.monthly_investment,
            input.annual_rate_percent,
            input.years,
        )),
        None => Err(report.errors()),
    }
}
