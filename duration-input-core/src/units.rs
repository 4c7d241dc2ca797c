//! Display units for durations, ordered from largest to smallest.

use crate::error::{DurationError, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Seconds in a year (365.25 days)
pub const SECONDS_PER_YEAR: u64 = 31_557_600;
/// Seconds in a month (365.25 days / 12)
pub const SECONDS_PER_MONTH: u64 = 2_629_800;
pub const SECONDS_PER_WEEK: u64 = 604_800;
pub const SECONDS_PER_DAY: u64 = 86_400;
pub const SECONDS_PER_HOUR: u64 = 3_600;
pub const SECONDS_PER_MINUTE: u64 = 60;

/// Name of the sentinel unit every table must end with
pub const SENTINEL_UNIT: &str = "second";

/// A named multiplier of seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitEntry {
    pub name: Cow<'static, str>,
    pub seconds: u64,
}

impl UnitEntry {
    #[must_use]
    pub const fn new(name: &'static str, seconds: u64) -> Self {
        Self {
            name: Cow::Borrowed(name),
            seconds,
        }
    }

    /// The sentinel entry that matches every non-negative second count
    #[must_use]
    pub const fn second() -> Self {
        Self::new(SENTINEL_UNIT, 1)
    }

    /// Whether this unit divides `seconds` into a whole number of units
    #[must_use]
    pub const fn divides(&self, seconds: u64) -> bool {
        seconds % self.seconds == 0
    }
}

static SENTINEL: UnitEntry = UnitEntry::second();

const DEFAULT_UNITS: [UnitEntry; 7] = [
    UnitEntry::new("year", SECONDS_PER_YEAR),
    UnitEntry::new("month", SECONDS_PER_MONTH),
    UnitEntry::new("week", SECONDS_PER_WEEK),
    UnitEntry::new("day", SECONDS_PER_DAY),
    UnitEntry::new("hour", SECONDS_PER_HOUR),
    UnitEntry::new("minute", SECONDS_PER_MINUTE),
    UnitEntry::second(),
];

/// Ordered list of units, largest first, always ending in one second.
///
/// The ordering and the sentinel are checked on construction, so unit
/// selection over a `UnitTable` always finds a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct UnitTable {
    entries: Vec<UnitEntry>,
}

impl UnitTable {
    /// Build a table from custom entries.
    ///
    /// # Errors
    ///
    /// Returns `InvalidUnitTable` if the table is empty, contains a zero
    /// multiplier, is not strictly descending, or does not end with the
    /// `second = 1` sentinel.
    pub fn new(entries: Vec<UnitEntry>) -> Result<Self> {
        let invalid = |reason: String| DurationError::InvalidUnitTable { reason };

        let Some(last) = entries.last() else {
            return Err(invalid("table has no units".to_string()));
        };

        if let Some(zero) = entries.iter().find(|unit| unit.seconds == 0) {
            return Err(invalid(format!("unit '{}' is zero seconds long", zero.name)));
        }

        if let Some(pair) = entries.windows(2).find(|pair| pair[0].seconds <= pair[1].seconds) {
            return Err(invalid(format!(
                "units must be sorted largest first, but '{}' ({}s) comes before '{}' ({}s)",
                pair[0].name, pair[0].seconds, pair[1].name, pair[1].seconds
            )));
        }

        if last.seconds != 1 || last.name != SENTINEL_UNIT {
            return Err(invalid(format!(
                "table must end with '{SENTINEL_UNIT}' = 1, found '{}' = {}",
                last.name, last.seconds
            )));
        }

        Ok(Self { entries })
    }

    #[must_use]
    pub fn entries(&self) -> &[UnitEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, UnitEntry> {
        self.entries.iter()
    }

    /// Find the unit with exactly `seconds` seconds per unit
    #[must_use]
    pub fn by_seconds(&self, seconds: u64) -> Option<&UnitEntry> {
        self.entries.iter().find(|unit| unit.seconds == seconds)
    }

    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&UnitEntry> {
        self.entries.iter().find(|unit| unit.name == name)
    }

    /// The smallest unit (always the one-second sentinel)
    #[must_use]
    pub fn smallest(&self) -> &UnitEntry {
        self.entries.last().unwrap_or(&SENTINEL)
    }
}

impl Default for UnitTable {
    fn default() -> Self {
        Self {
            entries: DEFAULT_UNITS.to_vec(),
        }
    }
}

impl<'de> Deserialize<'de> for UnitTable {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let entries = Vec::<UnitEntry>::deserialize(deserializer)?;
        Self::new(entries).map_err(serde::de::Error::custom)
    }
}

impl<'a> IntoIterator for &'a UnitTable {
    type Item = &'a UnitEntry;
    type IntoIter = std::slice::Iter<'a, UnitEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_is_valid() {
        let table = UnitTable::default();
        let rebuilt = UnitTable::new(table.entries().to_vec()).unwrap();
        assert_eq!(rebuilt, table);
        assert_eq!(table.entries().len(), 7);
        assert_eq!(table.entries()[0].name, "year");
        assert_eq!(table.smallest(), &UnitEntry::second());
    }

    #[test]
    fn test_rejects_empty_table() {
        let err = UnitTable::new(Vec::new()).unwrap_err();
        assert!(matches!(err, DurationError::InvalidUnitTable { .. }));
    }

    #[test]
    fn test_rejects_missing_sentinel() {
        let err = UnitTable::new(vec![UnitEntry::new("hour", 3600), UnitEntry::new("minute", 60)])
            .unwrap_err();
        assert!(err.to_string().contains("must end with 'second'"));
    }

    #[test]
    fn test_rejects_unsorted_table() {
        let err = UnitTable::new(vec![
            UnitEntry::new("minute", 60),
            UnitEntry::new("hour", 3600),
            UnitEntry::second(),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("largest first"));
    }

    #[test]
    fn test_rejects_duplicate_multiplier() {
        let err = UnitTable::new(vec![
            UnitEntry::new("hour", 3600),
            UnitEntry::new("hora", 3600),
            UnitEntry::second(),
        ])
        .unwrap_err();
        assert!(matches!(err, DurationError::InvalidUnitTable { .. }));
    }

    #[test]
    fn test_rejects_zero_multiplier() {
        let err = UnitTable::new(vec![UnitEntry::new("instant", 0), UnitEntry::second()])
            .unwrap_err();
        assert!(err.to_string().contains("zero seconds"));
    }

    #[test]
    fn test_lookup() {
        let table = UnitTable::default();
        assert_eq!(table.by_seconds(3600).map(|u| u.name.as_ref()), Some("hour"));
        assert_eq!(table.by_name("week").map(|u| u.seconds), Some(604_800));
        assert!(table.by_seconds(42).is_none());
    }

    #[test]
    fn test_deserialize_validates() {
        #[derive(Deserialize)]
        struct Wrapper {
            units: UnitTable,
        }

        let ok: Wrapper = toml::from_str(
            r#"
units = [
    { name = "hour", seconds = 3600 },
    { name = "second", seconds = 1 },
]
"#,
        )
        .unwrap();
        assert_eq!(ok.units.entries().len(), 2);

        let bad = toml::from_str::<Wrapper>(
            r#"
units = [{ name = "hour", seconds = 3600 }]
"#,
        );
        assert!(bad.is_err());
    }
}
