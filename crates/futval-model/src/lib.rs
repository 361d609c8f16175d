//! `futval-model` defines the domain types for the future-value core.
//!
//! The crate is intentionally self-contained so it can be reused by:
//! - the validation/calculation engine (`futval-engine`)
//! - any presentation host (CLI, web form, GUI) via `serde` (JSON-safe schema)

mod error;
mod field;
mod input;

pub use error::ValidationError;
pub use field::{labels, NumericKind};
pub use input::FutureValueInput;
