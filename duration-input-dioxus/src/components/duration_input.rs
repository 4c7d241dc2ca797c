use dioxus::prelude::*;
use duration_input_core::{
    Bounds, ChangeBus, CommitOutcome, DurationError, DurationModel, InputConfig, UnitTable,
    DEFAULT_MAX_SECONDS,
};
use tracing::{error, warn};

const LOG_TARGET: &str = "duration_input::component";

/// Model state held by the component. Construction errors are kept as text
/// and rendered in place of the input.
type ModelState = Result<DurationModel, String>;

/// Duration input: a number field plus a unit select, committed as whole seconds.
///
/// Change notifications go to `onchange` with the new value and to the
/// [`ChangeBus`] in context, if one was provided.
#[component]
pub fn DurationInput(
    /// Committed value in seconds
    value: u64,
    /// Lower bound in seconds
    #[props(default = 0)]
    min: u64,
    /// Upper bound in seconds
    #[props(default = DEFAULT_MAX_SECONDS)]
    max: u64,
    /// Confirm button label
    #[props(default = "set".to_string(), into)]
    label: String,
    /// Commit on every edit instead of showing a confirm button
    #[props(default)]
    no_confirm_button: bool,
    #[props(default)]
    units: UnitTable,
    /// Prefix for element ids, unique per page
    #[props(default = "duration".to_string(), into)]
    id: String,
    #[props(default)]
    onchange: EventHandler<u64>,
) -> Element {
    let bus = try_use_context::<ChangeBus>().unwrap_or_default();

    let mut model = use_signal(|| -> ModelState {
        let config = InputConfig {
            value,
            min,
            max,
            label: label.clone(),
            no_confirm_button,
        };
        DurationModel::new(&config, units.clone(), bus).map_err(|e| {
            error!(target: LOG_TARGET, "Failed to create duration input: {}", e);
            e.to_string()
        })
    });
    let mut invalid = use_signal(|| false);

    // Props set from outside win over local state, like attribute writes
    use_effect(use_reactive!(|(value, min, max, label, no_confirm_button)| {
        let mut state = model.write();
        let Ok(model) = &mut *state else {
            return;
        };

        match Bounds::new(min, max) {
            Ok(bounds) => model.set_bounds(bounds),
            Err(e) => warn!(target: LOG_TARGET, "Keeping previous bounds: {}", e),
        }
        model.set_label(label);
        model.set_no_confirm_button(no_confirm_button);

        if model.seconds() != value {
            if let Err(e) = model.set_value(value) {
                error!(target: LOG_TARGET, "{}", e);
            }
        }
    }));

    let view = match &*model.read() {
        Ok(model) => model.view(),
        Err(message) => {
            return rsx! {
                span { class: "duration-error", "{message}" }
            };
        }
    };

    let value_id = format!("{id}-value");
    let unit_id = format!("{id}-unit");

    rsx! {
        span {
            class: "duration-input",

            span {
                class: "wrap",

                label { r#for: "{value_id}", class: "sr-only", "Duration value" }
                input {
                    id: "{value_id}",
                    class: if invalid() { "invalid" },
                    r#type: "number",
                    value: "{view.magnitude}",
                    min: "{view.min}",
                    max: "{view.max}",
                    step: "0.001",
                    onchange: move |evt: FormEvent| {
                        let text = evt.value();
                        let accepted = apply(model, onchange, |model| model.edit_magnitude(&text));
                        invalid.set(!accepted);
                    },
                }

                label { r#for: "{unit_id}", class: "sr-only", "Duration unit" }
                select {
                    id: "{unit_id}",
                    value: "{view.unit_seconds}",
                    onchange: move |evt: FormEvent| {
                        let selected = evt.value();
                        apply(model, onchange, |model| model.select_unit_value(&selected));
                    },

                    for unit in view.options.iter() {
                        option {
                            key: "{unit.value}",
                            value: "{unit.value}",
                            selected: unit.selected,
                            "{unit.label}"
                        }
                    }
                }
            }

            if let Some(button_label) = view.confirm_label.clone() {
                button {
                    onclick: move |_| {
                        apply(model, onchange, |model| model.confirm().map(Some));
                    },
                    "{button_label}"
                }
            }
        }
    }
}

/// Run a model action and forward any resulting change to `onchange`.
///
/// Returns `false` if the action was rejected.
fn apply(
    mut model: Signal<ModelState>,
    onchange: EventHandler<u64>,
    action: impl FnOnce(&mut DurationModel) -> Result<Option<CommitOutcome>, DurationError>,
) -> bool {
    let result = {
        let mut state = model.write();
        let Ok(model) = &mut *state else {
            return false;
        };
        action(model)
    };

    match result {
        Ok(Some(outcome)) if outcome.changed => {
            onchange.call(outcome.seconds);
            true
        }
        Ok(_) => true,
        Err(e) => {
            warn!(target: LOG_TARGET, "Rejected duration edit: {}", e);
            false
        }
    }
}
