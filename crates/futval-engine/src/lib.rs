#![forbid(unsafe_code)]
#![deny(unreachable_patterns)]

//! Validation and future-value calculation for a monthly savings plan.
//!
//! The crate has two halves, both pure functions with no shared state:
//!
//! - [`validate`] classifies raw text fields against the numeric syntax
//!   each field requires and produces user-facing error messages. Presence
//!   is checked as a strict precondition inside the format checks, so a
//!   blank field always reports the "is required" message rather than a
//!   format error.
//! - [`financial`] computes the future value of a level monthly deposit
//!   compounded monthly (annuity-due: each deposit earns interest for the
//!   period it is deposited in).
//!
//! [`form`] ties the two together for hosts: run every field check, collect
//! all failures for simultaneous display, and only calculate when the whole
//! form is valid. Everything here is `Send + Sync` by construction; there
//! are no globals and no interior mutability, so concurrent invocation
//! needs no locking.

pub mod financial;
pub mod form;
pub mod validate;

pub use form::{check_form, evaluate, FormReport, FutureValueForm};
pub use futval_model::{labels, FutureValueInput, NumericKind, ValidationError};
