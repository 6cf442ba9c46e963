//! Display formatting shared by the weather transforms.

use crate::{error::ValidationError, model::Timestamp};

/// Round half away from zero and append `unit` with no separator.
pub fn format_rounded(value: f64, unit: &str) -> String {
    format!("{:.0}{unit}", positive_zero(value.round()))
}

/// Exactly one decimal place, then `unit`. Ties round away from zero, same
/// as [`format_rounded`]; `{:.1}` alone would round them to even.
pub fn format_one_decimal(value: f64, unit: &str) -> String {
    format!("{:.1}{unit}", positive_zero((value * 10.0).round() / 10.0))
}

// `-0.0 + 0.0` is `0.0`, so rounded-away negatives don't print as `-0`.
fn positive_zero(value: f64) -> f64 {
    value + 0.0
}

/// Split `2025-09-15T17:15` into date and time at the first `T`.
pub fn split_timestamp(raw: &str) -> Result<Timestamp, ValidationError> {
    let (date, time) = raw
        .split_once('T')
        .ok_or_else(|| ValidationError::Timestamp(raw.to_string()))?;

    Ok(Timestamp {
        date: date.to_string(),
        time: time.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_nearest_integer() {
        assert_eq!(format_rounded(20.2, "°C"), "20°C");
        assert_eq!(format_rounded(20.6, "°C"), "21°C");
        assert_eq!(format_rounded(70.0, "%"), "70%");
    }

    #[test]
    fn half_integers_round_away_from_zero() {
        assert_eq!(format_rounded(12.5, "°C"), "13°C");
        assert_eq!(format_rounded(13.5, "°C"), "14°C");
        assert_eq!(format_rounded(-2.5, "°C"), "-3°C");
    }

    #[test]
    fn small_negatives_do_not_print_negative_zero() {
        assert_eq!(format_rounded(-0.4, "°C"), "0°C");
    }

    #[test]
    fn one_decimal_pads_and_rounds() {
        assert_eq!(format_one_decimal(0.0, "mm"), "0.0mm");
        assert_eq!(format_one_decimal(9.2, "km/h"), "9.2km/h");
        assert_eq!(format_one_decimal(12.0, "km/h"), "12.0km/h");
        assert_eq!(format_one_decimal(3.14159, "mm"), "3.1mm");
    }

    #[test]
    fn one_decimal_ties_round_away_from_zero() {
        assert_eq!(format_one_decimal(0.25, "mm"), "0.3mm");
        assert_eq!(format_one_decimal(0.75, "mm"), "0.8mm");
        assert_eq!(format_one_decimal(1.25, "km/h"), "1.3km/h");
        assert_eq!(format_one_decimal(-1.25, "km/h"), "-1.3km/h");
    }

    #[test]
    fn one_decimal_small_negatives_do_not_print_negative_zero() {
        assert_eq!(format_one_decimal(-0.04, "mm"), "0.0mm");
    }

    #[test]
    fn huge_values_are_not_clamped() {
        assert_eq!(format_rounded(1e20, "°C"), "100000000000000000000°C");
    }

    #[test]
    fn splits_on_first_t() {
        let ts = split_timestamp("2025-09-15T17:15").unwrap();
        assert_eq!(ts.date, "2025-09-15");
        assert_eq!(ts.time, "17:15");
    }

    #[test]
    fn timestamp_without_separator_is_rejected() {
        let err = split_timestamp("2025-09-15").unwrap_err();
        assert_eq!(err, ValidationError::Timestamp("2025-09-15".into()));
    }
}
