use crate::state::DemoState;
use dioxus::prelude::*;
use duration_input_core::{describe, ChangeBus, DurationEvent, UnitTable};
use tracing::info;

const LOG_TARGET: &str = "duration_input::bridge";

/// Bridge change bus events to Dioxus signals.
/// Spawns a task that listens on the bus and updates the demo state.
pub fn use_change_bus_bridge(bus: &ChangeBus, units: UnitTable, state: DemoState) {
    let bus = bus.clone();
    use_future(move || {
        let bus = bus.clone();
        let units = units.clone();
        async move {
            let mut rx = bus.subscribe();

            loop {
                match rx.recv().await {
                    Ok(event) => {
                        handle_duration_event(event, &units, state);
                    }
                    Err(tokio::sync::broadcast::error::RecvError::Closed) => {
                        info!(target: LOG_TARGET, "Change bus closed");
                        break;
                    }
                    Err(tokio::sync::broadcast::error::RecvError::Lagged(n)) => {
                        info!(target: LOG_TARGET, "Missed {} change events", n);
                    }
                }
            }
        }
    });
}

fn handle_duration_event(event: DurationEvent, units: &UnitTable, mut state: DemoState) {
    match event {
        DurationEvent::Changed => {
            state.record_change();

            // The event carries no value; read the one the input reported
            let seconds = *state.committed.peek();
            let described = describe(seconds, units).unwrap_or_else(|e| e.to_string());
            info!(
                target: LOG_TARGET,
                "Duration changed to {} ({}s), {} change(s) so far",
                described,
                seconds,
                state.change_count.peek()
            );
        }
    }
}
