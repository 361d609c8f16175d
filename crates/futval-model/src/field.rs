use serde::{Deserialize, Serialize};

/// Field labels used verbatim in validation messages.
///
/// The labels are part of the public contract: hosts render them next to the
/// input fields and the engine embeds them in error text.
pub mod labels {
    pub const MONTHLY_INVESTMENT: &str = "Monthly Investment";
    pub const YEARLY_INTEREST_RATE: &str = "Yearly Interest Rate";
    pub const YEARS: &str = "Years";
}

/// The numeric syntax a field is required to satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericKind {
    /// Optional sign, digits, optionally a single `.` and further digits.
    Decimal,
    /// Optional sign and digits only; no decimal point.
    Integer,
}

impl NumericKind {
    /// Noun phrase used in format-error messages ("a number" / "an integer").
    pub const fn expected(self) -> &'static str {
        match self {
            NumericKind::Decimal => "a number",
            NumericKind::Integer => "an integer",
        }
    }
}
