//! Field-level validation checks.
//!
//! Every check is total: each outcome is a return value and the error's
//! `Display` text is exactly what the host shows next to the field. The
//! format checks enforce presence first, so for a field that is both blank
//! and unparseable the presence message wins.
//!
//! The numeric syntax is deliberately stricter than `str::parse`: no
//! exponents, no leading `.`, no thousands separators, no currency symbols.
//! Syntax is gated by a byte scanner and only then handed to `str::parse`
//! for the actual conversion, so the checks also return the parsed value
//! and callers never parse the text a second time.

use futval_model::{NumericKind, ValidationError};

/// Checks that `raw` is non-blank after trimming surrounding whitespace.
pub fn check_present(field: &str, raw: &str) -> Result<(), ValidationError> {
    if raw.trim().is_empty() {
        Err(ValidationError::missing(field))
    } else {
        Ok(())
    }
}

/// Checks that `raw` is a present, plainly-formatted decimal number.
///
/// Accepts an optional sign, one or more digits, and optionally a single
/// `.` followed by zero or more digits (`"3.14"`, `"-2"`, `"+5."`).
pub fn check_decimal(field: &str, raw: &str) -> Result<f64, ValidationError> {
    check_present(field, raw)?;
    let trimmed = raw.trim();
    if !is_decimal_syntax(trimmed) {
        return Err(ValidationError::wrong_format(field, NumericKind::Decimal));
    }
    trimmed
        .parse()
        .map_err(|_| ValidationError::wrong_format(field, NumericKind::Decimal))
}

/// Checks that `raw` is a present integer: an optional sign followed by
/// digits, with no decimal point at all.
///
/// Digit strings outside the `i32` range are rejected as a format error;
/// a number that cannot be represented is not a usable integer.
pub fn check_integer(field: &str, raw: &str) -> Result<i32, ValidationError> {
    check_present(field, raw)?;
    let trimmed = raw.trim();
    if !is_integer_syntax(trimmed) {
        return Err(ValidationError::wrong_format(field, NumericKind::Integer));
    }
    trimmed
        .parse()
        .map_err(|_| ValidationError::wrong_format(field, NumericKind::Integer))
}

fn scan_sign(bytes: &[u8]) -> usize {
    match bytes.first() {
        Some(b'+' | b'-') => 1,
        _ => 0,
    }
}

fn scan_digits(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    i
}

fn is_decimal_syntax(s: &str) -> bool {
    let bytes = s.as_bytes();
    let start = scan_sign(bytes);
    let int_end = scan_digits(bytes, start);
    if int_end == start {
        // At least one digit before any decimal point.
        return false;
    }
    if int_end == bytes.len() {
        return true;
    }
    if bytes[int_end] != b'.' {
        return false;
    }
    scan_digits(bytes, int_end + 1) == bytes.len()
}

fn is_integer_syntax(s: &str) -> bool {
    let bytes = s.as_bytes();
    let start = scan_sign(bytes);
    let end = scan_digits(bytes, start);
    end > start && end == bytes.len()
}
