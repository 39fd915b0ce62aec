use super::{percent_change, percentage, ratio, Monetary, MonetaryError};
use anyhow::Result;
use rust_decimal_macros::dec;
use std::str::FromStr;

#[test]
fn test_monetary_successfully_parses_valid_strings() -> Result<()> {
    let test_cases = vec![
        ("1.0", "1.00"),
        ("1.25", "1.25"),
        ("0.01", "0.01"),
        ("-1.5", "-1.50"),
        ("  1.0  ", "1.00"),
        ("-0.01", "-0.01"),
        ("+1.0", "1.00"),
        ("100", "100.00"),
        ("1.", "1.00"),
    ];

    for (input_string, expected_output) in test_cases {
        assert_eq!(Monetary::from_str(input_string)?.to_string(), expected_output);
    }

    Ok(())
}

#[test]
fn test_monetary_fails_to_parse_invalid_strings() {
    assert!(Monetary::from_str("1.123").is_err());
    assert!(Monetary::from_str("abc").is_err());
    assert!(Monetary::from_str("1.2.3").is_err());
    assert!(Monetary::from_str("").is_err());
    assert!(Monetary::from_str(".5").is_err());
    assert!(Monetary::from_str("1.-5").is_err());
}

#[test]
fn test_monetary_rounds_decimals_half_away_from_zero() -> Result<()> {
    assert_eq!(Monetary::from_decimal(dec!(10.005))?.to_string(), "10.01");
    assert_eq!(Monetary::from_decimal(dec!(10.004))?.to_string(), "10.00");
    assert_eq!(Monetary::from_decimal(dec!(283.8000))?.cents(), 28380);

    Ok(())
}

#[test]
fn test_monetary_sum_and_average_stay_on_cents() -> Result<()> {
    let values = [Monetary::from_str("10.00")?, Monetary::from_str("0.01")?, Monetary::from_str("0.02")?];
    let total = Monetary::checked_sum(values)?;

    assert_eq!(total.to_string(), "10.03");
    assert_eq!(total.average(3)?.to_string(), "3.34");
    assert!(total.average(0)?.is_zero());

    Ok(())
}

#[test]
fn test_monetary_sum_reports_overflow_instead_of_keeping_a_partial_total() {
    let near_limit = Monetary::from_cents(i64::MAX - 10);

    assert_eq!(near_limit.checked_add(Monetary::from_cents(100)), None);
    assert!(matches!(
        Monetary::checked_sum([near_limit, Monetary::from_cents(100)]),
        Err(MonetaryError::Overflow)
    ));
    assert!(matches!(
        Monetary::checked_sum([near_limit, Monetary::from_cents(10)]),
        Ok(total) if total.cents() == i64::MAX
    ));
}

#[test]
fn test_monetary_serializes_as_fixed_point_string() -> Result<()> {
    let json = serde_json::to_string(&Monetary::from_str("42.5")?)?;
    assert_eq!(json, "\"42.50\"");

    let parsed: Monetary = serde_json::from_str("\"0.07\"")?;
    assert_eq!(parsed.cents(), 7);

    Ok(())
}

#[test]
fn test_percentage_guards_zero_denominator() {
    assert_eq!(percentage(dec!(4), dec!(22)), dec!(18.2));
    assert_eq!(percentage(dec!(1), dec!(8)), dec!(12.5));
    assert_eq!(percentage(dec!(5), dec!(0)), dec!(0));
}

#[test]
fn test_percent_change_handles_zero_baseline() {
    assert_eq!(percent_change(dec!(15), dec!(10)), dec!(50.0));
    assert_eq!(percent_change(dec!(0), dec!(10)), dec!(-100.0));
    assert_eq!(percent_change(dec!(3), dec!(0)), dec!(100));
    assert_eq!(percent_change(dec!(0), dec!(0)), dec!(0));
}

#[test]
fn test_ratio_rounds_to_two_places() {
    assert_eq!(ratio(18, 10), dec!(1.80));
    assert_eq!(ratio(2, 3), dec!(0.67));
    assert_eq!(ratio(5, 0), dec!(0));
}

#[test]
fn test_rounded_figures_keep_a_fixed_number_of_digits() {
    assert_eq!(percentage(dec!(3), dec!(5)).to_string(), "60.0");
    assert_eq!(percentage(dec!(0), dec!(0)).to_string(), "0.0");
    assert_eq!(percent_change(dec!(2), dec!(0)).to_string(), "100.0");
    assert_eq!(ratio(18, 10).to_string(), "1.80");
    assert_eq!(ratio(0, 0).to_string(), "0.00");
}
