//! Display formatting for unit labels and magnitudes.

use crate::error::Result;
use crate::select::select_unit;
use crate::units::UnitTable;

/// Plural suffix for a displayed magnitude: empty for exactly 1, `"s"` otherwise.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn pluralize(value: f64) -> &'static str {
    if value == 1.0 {
        ""
    } else {
        "s"
    }
}

/// Upper-case the first character of `input`.
#[must_use]
pub fn capitalize(input: &str) -> String {
    let mut chars = input.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Label for a unit as shown next to `value` ("Hour", "Minutes").
#[must_use]
pub fn unit_label(name: &str, value: f64) -> String {
    format!("{}{}", capitalize(name), pluralize(value))
}

/// Format a magnitude with at most three decimals and no trailing zeros.
#[must_use]
pub fn format_magnitude(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let formatted = format!("{value:.3}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');

    match trimmed {
        "-0" | "" => "0".to_string(),
        other => other.to_string(),
    }
}

/// Describe a second count in its display unit, e.g. `"1.5 Hours"`.
///
/// # Errors
///
/// Propagates `NoMatchingUnit` from unit selection.
pub fn describe(seconds: u64, table: &UnitTable) -> Result<String> {
    let selection = select_unit(seconds, table)?;
    Ok(format!(
        "{} {}",
        format_magnitude(selection.human_value),
        unit_label(&selection.unit.name, selection.human_value)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize(1.0), "");
        assert_eq!(pluralize(0.0), "s");
        assert_eq!(pluralize(2.5), "s");
        assert_eq!(pluralize(1.001), "s");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("hour"), "Hour");
        assert_eq!(capitalize("Year"), "Year");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("ärger"), "Ärger");
    }

    #[test]
    fn test_unit_label() {
        assert_eq!(unit_label("hour", 1.0), "Hour");
        assert_eq!(unit_label("second", 90.0), "Seconds");
        assert_eq!(unit_label("day", 0.5), "Days");
    }

    #[test]
    fn test_format_magnitude() {
        assert_eq!(format_magnitude(1.0), "1");
        assert_eq!(format_magnitude(1.5), "1.5");
        assert_eq!(format_magnitude(0.278), "0.278");
        assert_eq!(format_magnitude(0.0), "0");
        assert_eq!(format_magnitude(-0.0), "0");
        assert_eq!(format_magnitude(120.0), "120");
    }

    #[test]
    fn test_describe() {
        let table = UnitTable::default();
        assert_eq!(describe(3600, &table).unwrap(), "1 Hour");
        assert_eq!(describe(90, &table).unwrap(), "90 Seconds");
        assert_eq!(describe(0, &table).unwrap(), "0 Seconds");
        assert_eq!(describe(5400, &table).unwrap(), "90 Minutes");
    }
}
