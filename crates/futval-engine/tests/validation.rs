use futval_engine::validate::{check_decimal, check_integer, check_present};
use futval_model::labels;
use pretty_assertions::assert_eq;

#[test]
fn presence_check_rejects_blank_input() {
    for field in [
        labels::MONTHLY_INVESTMENT,
        labels::YEARLY_INTEREST_RATE,
        labels::YEARS,
    ] {
        for raw in ["", "   ", "\t", " \u{a0} "] {
            let err = check_present(field, raw).unwrap_err();
            assert_eq!(err.to_string(), format!("{field} is required."));
        }
        assert!(check_present(field, "5").is_ok());
    }
}

#[test]
fn decimal_check_accepts_plain_decimals() {
    assert_eq!(check_decimal("Monthly Investment", "3.14"), Ok(3.14));
    assert_eq!(check_decimal("Monthly Investment", "100"), Ok(100.0));
    assert_eq!(check_decimal("Monthly Investment", "  8.5 "), Ok(8.5));
    assert_eq!(check_decimal("Monthly Investment", "-2.5"), Ok(-2.5));
}

#[test]
fn decimal_check_reports_format_errors() {
    for raw in ["abc", "3.14.1", "1e5", "1,000", "$100", ".5"] {
        let err = check_decimal("Monthly Investment", raw).unwrap_err();
        assert_eq!(err.to_string(), "Monthly Investment must be a number.");
    }
}

#[test]
fn integer_check_accepts_whole_numbers() {
    assert_eq!(check_integer("Years", "42"), Ok(42));
    assert_eq!(check_integer("Years", " 10 "), Ok(10));
    assert_eq!(check_integer("Years", "+7"), Ok(7));
    assert_eq!(check_integer("Years", "-3"), Ok(-3));
}

#[test]
fn integer_check_reports_format_errors() {
    for raw in ["4.2", "4.", "ten", "1e2", "42 years"] {
        let err = check_integer("Years", raw).unwrap_err();
        assert_eq!(err.to_string(), "Years must be an integer.");
    }
}

// A field that is both blank and unparseable reports the presence message,
// never the format message.
#[test]
fn presence_takes_priority_over_format() {
    for raw in ["", "   "] {
        let decimal_err = check_decimal("Monthly Investment", raw).unwrap_err();
        assert_eq!(decimal_err.to_string(), "Monthly Investment is required.");

        let integer_err = check_integer("Years", raw).unwrap_err();
        assert_eq!(integer_err.to_string(), "Years is required.");
    }
}

#[test]
fn checks_are_idempotent() {
    for raw in ["", "  ", "abc", "3.14", "42", "4.2"] {
        assert_eq!(
            check_decimal("Monthly Investment", raw),
            check_decimal("Monthly Investment", raw)
        );
        assert_eq!(check_integer("Years", raw), check_integer("Years", raw));
    }
}
