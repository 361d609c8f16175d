use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::field::NumericKind;

/// A single field failing validation.
///
/// The `Display` output is the exact text shown to the user, so the message
/// wording here is contract, not decoration. Exactly two kinds exist:
/// a blank field ([`ValidationError::MissingValue`]) and a non-blank field
/// that does not parse as the required numeric kind
/// ([`ValidationError::WrongFormat`]). A field that is both blank and
/// unparseable always reports `MissingValue`; the engine enforces presence
/// as a precondition inside the format checks.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ValidationError {
    #[error("{field} is required.")]
    MissingValue { field: String },
    #[error("{field} must be {}.", .kind.expected())]
    WrongFormat { field: String, kind: NumericKind },
}

impl ValidationError {
    pub fn missing(field: &str) -> Self {
        ValidationError::MissingValue {
            field: field.to_string(),
        }
    }

    pub fn wrong_format(field: &str, kind: NumericKind) -> Self {
        ValidationError::WrongFormat {
            field: field.to_string(),
            kind,
        }
    }

    /// The label of the field this error is about.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::MissingValue { field } => field,
            ValidationError::WrongFormat { field, .. } => field,
        }
    }
}
