//! Picking a display unit for a raw second count.

use crate::error::{DurationError, Result};
use crate::time::{round_to_millis, secs_as_f64};
use crate::units::{UnitEntry, UnitTable};
use tracing::error;

const LOG_TARGET: &str = "duration_input::select";

/// A second count projected onto a display unit.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitSelection {
    pub unit: UnitEntry,
    /// Magnitude in `unit`, rounded to three decimal places
    pub human_value: f64,
}

impl UnitSelection {
    fn new(seconds: u64, unit: &UnitEntry) -> Self {
        Self {
            human_value: round_to_millis(secs_as_f64(seconds) / secs_as_f64(unit.seconds)),
            unit: unit.clone(),
        }
    }
}

/// Select the display unit for `seconds`.
///
/// The largest unit that divides `seconds` evenly wins, so 7200 shows as
/// "2 hours" rather than "120 minutes". If nothing divides evenly the largest
/// unit not exceeding the value is used instead. Zero shows in the smallest
/// unit ("0 seconds") rather than the largest.
///
/// # Errors
///
/// Returns `NoMatchingUnit` if no unit fits, which a validated [`UnitTable`]
/// rules out. It is an internal logic error, not a user-facing one.
pub fn select_unit(seconds: u64, table: &UnitTable) -> Result<UnitSelection> {
    if seconds == 0 {
        return Ok(UnitSelection::new(0, table.smallest()));
    }

    let unit = table
        .iter()
        .find(|unit| unit.divides(seconds))
        .or_else(|| table.iter().find(|unit| unit.seconds <= seconds));

    unit.map(|unit| UnitSelection::new(seconds, unit)).ok_or_else(|| {
        error!(target: LOG_TARGET, "No unit matched {} seconds in {:?}", seconds, table);
        DurationError::NoMatchingUnit { seconds }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{SECONDS_PER_DAY, SECONDS_PER_MONTH, SECONDS_PER_YEAR};

    fn select(seconds: u64) -> UnitSelection {
        select_unit(seconds, &UnitTable::default()).unwrap()
    }

    #[test]
    fn test_one_hour() {
        let selection = select(3600);
        assert_eq!(selection.unit.name, "hour");
        assert!((selection.human_value - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_ninety_seconds() {
        let selection = select(90);
        assert_eq!(selection.unit.name, "second");
        assert!((selection.human_value - 90.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_prefers_largest_clean_unit() {
        assert_eq!(select(7200).unit.name, "hour");
        assert_eq!(select(5400).unit.name, "minute");
        assert_eq!(select(2 * SECONDS_PER_DAY).unit.name, "day");
        assert_eq!(select(14 * SECONDS_PER_DAY).unit.name, "week");
        assert_eq!(select(SECONDS_PER_MONTH).unit.name, "month");
        assert_eq!(select(5 * SECONDS_PER_YEAR).unit.name, "year");
    }

    #[test]
    fn test_zero_uses_smallest_unit() {
        let selection = select(0);
        assert_eq!(selection.unit.name, "second");
        assert!(selection.human_value.abs() < f64::EPSILON);
    }

    #[test]
    fn test_rounds_to_three_decimals() {
        let hour = UnitEntry::new("hour", 3600);
        assert!((UnitSelection::new(5400, &hour).human_value - 1.5).abs() < f64::EPSILON);
        assert!((UnitSelection::new(1000, &hour).human_value - 0.278).abs() < 1e-9);
    }

    #[test]
    fn test_custom_table() {
        let table = UnitTable::new(vec![UnitEntry::new("hour", 3600), UnitEntry::second()])
            .unwrap();
        assert_eq!(select_unit(7200, &table).unwrap().unit.name, "hour");
        assert_eq!(select_unit(3601, &table).unwrap().unit.name, "second");
        assert_eq!(select_unit(120, &table).unwrap().unit.name, "second");
    }

    #[test]
    fn test_always_selects_a_unit() {
        let table = UnitTable::default();
        for seconds in (0..200_000).step_by(37).chain([u64::MAX, u64::MAX - 1]) {
            assert!(select_unit(seconds, &table).is_ok(), "no unit for {seconds}");
        }
    }

    #[test]
    fn test_clean_branch_round_trips() {
        let table = UnitTable::default();
        for seconds in (0..400_000).step_by(60) {
            let selection = select_unit(seconds, &table).unwrap();
            if selection.unit.divides(seconds) {
                let back = (selection.human_value * secs_as_f64(selection.unit.seconds)).round();
                assert!((back - secs_as_f64(seconds)).abs() < f64::EPSILON, "{seconds}");
            }
        }
    }
}
