//! Parsing of the decimal strings SimBrief uses for every measured quantity.

use crate::error::{BriefError, FieldResultExt, Result};

/// Parses a decimal string into a finite number.
///
/// Empty strings are rejected rather than read as zero.
pub fn parse_number(field: &str, text: &str) -> Result<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(BriefError::invalid_input(field).with_reason("missing value"));
    }

    let value = trimmed.parse::<f64>().field_context(field)?;
    if !value.is_finite() {
        return Err(BriefError::invalid_input(field).with_reason(format!("'{trimmed}' is not finite")));
    }
    Ok(value)
}

/// Parses a duration or timestamp given in whole seconds.
///
/// Fractional values are truncated toward negative infinity. Values outside
/// the `i64` range are rejected.
pub fn parse_seconds(field: &str, text: &str) -> Result<i64> {
    to_seconds(field, parse_number(field, text)?)
}

fn to_seconds(field: &str, value: f64) -> Result<i64> {
    let floored = value.floor();
    // `i64::MAX as f64` rounds up to 2^63, which is itself out of range.
    if floored < i64::MIN as f64 || floored >= i64::MAX as f64 {
        return Err(BriefError::invalid_input(field)
            .with_reason(format!("{value} seconds is out of range")));
    }
    Ok(floored as i64)
}

/// Parses an optional quantity, treating a missing or blank value as zero.
pub fn parse_number_or_zero(field: &str, text: Option<&str>) -> Result<f64> {
    match text.map(str::trim) {
        None | Some("") => Ok(0.0),
        Some(text) => parse_number(field, text),
    }
}

/// Seconds counterpart of [`parse_number_or_zero`].
pub fn parse_seconds_or_zero(field: &str, text: Option<&str>) -> Result<i64> {
    to_seconds(field, parse_number_or_zero(field, text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_accepts_decimals() {
        assert_eq!(parse_number("fuel.taxi", "250").unwrap(), 250.0);
        assert_eq!(parse_number("fuel.taxi", " 12.5 ").unwrap(), 12.5);
        assert_eq!(parse_number("general.avg_wind_comp", "-15").unwrap(), -15.0);
    }

    #[test]
    fn test_parse_number_rejects_garbage() {
        let err = parse_number("fuel.reserve", "12kg").unwrap_err();
        assert_eq!(err.field(), Some("fuel.reserve"));
    }

    #[test]
    fn test_parse_number_rejects_empty_and_non_finite() {
        assert!(parse_number("fuel.reserve", "").is_err());
        assert!(parse_number("fuel.reserve", "NaN").is_err());
        assert!(parse_number("fuel.reserve", "inf").is_err());
    }

    #[test]
    fn test_parse_seconds_floors() {
        assert_eq!(parse_seconds("times.taxi_out", "600").unwrap(), 600);
        assert_eq!(parse_seconds("times.taxi_out", "600.9").unwrap(), 600);
    }

    #[test]
    fn test_optional_parsers_default_to_zero() {
        assert_eq!(parse_number_or_zero("alternate[0].ete", None).unwrap(), 0.0);
        assert_eq!(parse_seconds_or_zero("alternate[0].ete", Some("")).unwrap(), 0);
        assert_eq!(parse_seconds_or_zero("alternate[0].ete", Some("2700")).unwrap(), 2700);
        assert!(parse_seconds_or_zero("alternate[0].ete", Some("soon")).is_err());
    }

    #[test]
    fn test_parse_seconds_rejects_out_of_range() {
        let err = parse_seconds("times.est_time_enroute", "1e30").unwrap_err();
        assert_eq!(err.field(), Some("times.est_time_enroute"));
        assert!(parse_seconds("times.taxi_out", "-1e30").is_err());

        let err =
            parse_seconds_or_zero("alternate[0].ete", Some("9223372036854775807")).unwrap_err();
        assert_eq!(err.field(), Some("alternate[0].ete"));

        assert_eq!(
            parse_seconds("times.sched_out", "-9223372036854775808").unwrap(),
            i64::MIN
        );
    }
}
