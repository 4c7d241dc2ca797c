use crate::components::DurationInput;
use crate::state::DemoState;
use dioxus::prelude::*;
use duration_input_core::{describe, InputConfig, UnitTable};

/// Root application component.
/// Renders the configured duration input and a readout of the committed value.
#[component]
pub fn App() -> Element {
    let config = use_context::<InputConfig>();
    let units = use_context::<UnitTable>();
    let mut state = use_context::<DemoState>();

    let seconds = (state.committed)();
    let change_count = (state.change_count)();
    let described = describe(seconds, &units).unwrap_or_else(|e| e.to_string());

    rsx! {
        div {
            class: "container",

            DurationInput {
                value: seconds,
                min: config.min,
                max: config.max,
                label: config.label.clone(),
                no_confirm_button: config.no_confirm_button,
                units: units.clone(),
                onchange: move |seconds| state.commit(seconds),
            }

            p {
                class: "readout",
                "{described} ({seconds}s), {change_count} change(s)"
            }
        }
    }
}
