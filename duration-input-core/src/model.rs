//! Stateful duration input: committed seconds plus the pending display edit.

use crate::commit::{commit, Bounds, CommitOutcome};
use crate::config::InputConfig;
use crate::error::{DurationError, Result};
use crate::events::{ChangeBus, DurationEvent};
use crate::format::{format_magnitude, unit_label};
use crate::select::{select_unit, UnitSelection};
use crate::time::secs_as_f64;
use crate::units::{UnitEntry, UnitTable};
use tracing::{debug, info};

const LOG_TARGET: &str = "duration_input::model";

/// Magnitude and unit the user has entered but not yet committed
#[derive(Debug, Clone, PartialEq)]
pub struct PendingEdit {
    pub human_value: f64,
    pub unit: UnitEntry,
}

impl From<UnitSelection> for PendingEdit {
    fn from(selection: UnitSelection) -> Self {
        Self {
            human_value: selection.human_value,
            unit: selection.unit,
        }
    }
}

/// One entry of the unit select list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitOption {
    /// Seconds per unit, used as the option value
    pub value: u64,
    pub label: String,
    pub selected: bool,
}

/// Everything needed to draw the input, computed from current state.
#[derive(Debug, Clone, PartialEq)]
pub struct DurationView {
    pub human_value: f64,
    /// `human_value` formatted for the number field
    pub magnitude: String,
    pub unit_seconds: u64,
    pub options: Vec<UnitOption>,
    pub min: u64,
    pub max: u64,
    /// Confirm button label, `None` when changes commit immediately
    pub confirm_label: Option<String>,
}

/// A duration input.
///
/// `seconds` is the source of truth. The projection onto a display unit is
/// derived from it whenever it changes; the pending edit starts out equal to
/// the projection and tracks user input until the next commit.
#[derive(Debug, Clone)]
pub struct DurationModel {
    seconds: u64,
    bounds: Bounds,
    units: UnitTable,
    label: String,
    no_confirm_button: bool,
    projection: UnitSelection,
    pending: PendingEdit,
    bus: ChangeBus,
}

impl DurationModel {
    /// Create an input from its settings.
    ///
    /// # Errors
    ///
    /// Returns `InvalidBounds` if `min > max`.
    pub fn new(config: &InputConfig, units: UnitTable, bus: ChangeBus) -> Result<Self> {
        let bounds = config.bounds()?;
        let projection = select_unit(config.value, &units)?;

        Ok(Self {
            seconds: config.value,
            bounds,
            units,
            label: config.label.clone(),
            no_confirm_button: config.no_confirm_button,
            pending: projection.clone().into(),
            projection,
            bus,
        })
    }

    #[must_use]
    pub const fn seconds(&self) -> u64 {
        self.seconds
    }

    #[must_use]
    pub const fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[must_use]
    pub const fn units(&self) -> &UnitTable {
        &self.units
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub const fn no_confirm_button(&self) -> bool {
        self.no_confirm_button
    }

    /// Display projection of the committed value
    #[must_use]
    pub const fn projection(&self) -> &UnitSelection {
        &self.projection
    }

    #[must_use]
    pub const fn pending(&self) -> &PendingEdit {
        &self.pending
    }

    #[must_use]
    pub const fn bus(&self) -> &ChangeBus {
        &self.bus
    }

    /// Set the value from outside (no change event), then refresh the display.
    ///
    /// # Errors
    ///
    /// Propagates unit selection failures.
    pub fn set_value(&mut self, seconds: u64) -> Result<()> {
        self.seconds = seconds;
        self.refresh()
    }

    /// Replace the bounds used by later commits.
    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn set_no_confirm_button(&mut self, no_confirm_button: bool) {
        self.no_confirm_button = no_confirm_button;
    }

    /// Recompute the display projection from `seconds`, discarding any pending edit.
    ///
    /// # Errors
    ///
    /// Returns `NoMatchingUnit` if unit selection fails.
    pub fn refresh(&mut self) -> Result<()> {
        self.projection = select_unit(self.seconds, &self.units)?;
        self.pending = self.projection.clone().into();
        Ok(())
    }

    /// Handle an edit of the magnitude field.
    ///
    /// Commits right away when there is no confirm button.
    ///
    /// # Errors
    ///
    /// Returns `InvalidMagnitude` if `text` is not a number; pending state is
    /// left untouched.
    pub fn edit_magnitude(&mut self, text: &str) -> Result<Option<CommitOutcome>> {
        let human_value = parse_magnitude(text)?;
        debug!(target: LOG_TARGET, "Pending magnitude set to {}", human_value);
        self.pending.human_value = human_value;
        self.commit_if_buttonless()
    }

    /// Handle a change of the unit select, given the selected option value.
    ///
    /// Values that match no unit are ignored.
    ///
    /// # Errors
    ///
    /// Propagates commit failures when there is no confirm button.
    pub fn select_unit_value(&mut self, value: &str) -> Result<Option<CommitOutcome>> {
        let Some(unit) = self.lookup_unit(value) else {
            debug!(target: LOG_TARGET, "Ignoring unknown unit value {:?}", value);
            return Ok(None);
        };

        debug!(target: LOG_TARGET, "Pending unit set to {}", unit.name);
        self.pending.unit = unit;
        self.commit_if_buttonless()
    }

    /// Commit the pending edit.
    ///
    /// The clamped result becomes the new value and the display is refreshed
    /// from it. A change event is sent only if the value actually changed.
    ///
    /// # Errors
    ///
    /// Returns `InvalidMagnitude` if the pending magnitude is NaN.
    pub fn confirm(&mut self) -> Result<CommitOutcome> {
        let outcome = commit(
            self.pending.human_value,
            self.pending.unit.seconds,
            self.bounds,
            self.seconds,
        )?;

        if outcome.clamped {
            info!(
                target: LOG_TARGET,
                "Clamped {} {} into [{}, {}]",
                self.pending.human_value,
                self.pending.unit.name,
                self.bounds.min(),
                self.bounds.max()
            );
        }

        self.seconds = outcome.seconds;
        self.refresh()?;

        if outcome.changed {
            info!(target: LOG_TARGET, "Duration changed to {}s", outcome.seconds);
            self.bus.notify(DurationEvent::Changed);
        }

        Ok(outcome)
    }

    /// Current render state.
    #[must_use]
    pub fn view(&self) -> DurationView {
        let human_value = self.pending.human_value;
        let options = self
            .units
            .iter()
            .map(|unit| UnitOption {
                value: unit.seconds,
                label: unit_label(&unit.name, human_value),
                selected: unit.seconds == self.pending.unit.seconds,
            })
            .collect();

        DurationView {
            human_value,
            magnitude: format_magnitude(human_value),
            unit_seconds: self.pending.unit.seconds,
            options,
            min: self.bounds.min(),
            max: self.bounds.max(),
            confirm_label: (!self.no_confirm_button).then(|| self.label.clone()),
        }
    }

    fn commit_if_buttonless(&mut self) -> Result<Option<CommitOutcome>> {
        if self.no_confirm_button {
            self.confirm().map(Some)
        } else {
            Ok(None)
        }
    }

    #[allow(clippy::float_cmp)]
    fn lookup_unit(&self, value: &str) -> Option<UnitEntry> {
        let value = value.trim().parse::<f64>().ok()?;
        self.units
            .iter()
            .find(|unit| secs_as_f64(unit.seconds) == value)
            .cloned()
    }
}

/// Parse magnitude field text.
///
/// # Errors
///
/// Returns `InvalidMagnitude` for text that is not a number, including `NaN`.
pub fn parse_magnitude(text: &str) -> Result<f64> {
    match text.trim().parse::<f64>() {
        Ok(value) if !value.is_nan() => Ok(value),
        _ => Err(DurationError::InvalidMagnitude {
            input: text.to_string(),
        }),
    }
}
