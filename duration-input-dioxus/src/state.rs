use dioxus::prelude::*;

/// Demo window state shared through context.
#[derive(Clone, Copy)]
pub struct DemoState {
    /// Last committed value in seconds
    pub committed: Signal<u64>,
    /// Number of change notifications seen on the change bus
    pub change_count: Signal<u64>,
}

impl DemoState {
    /// Create demo state starting at `initial` seconds
    #[must_use]
    pub fn new(initial: u64) -> Self {
        Self {
            committed: Signal::new(initial),
            change_count: Signal::new(0),
        }
    }

    /// Record a committed value reported by the input
    pub fn commit(&mut self, seconds: u64) {
        self.committed.set(seconds);
    }

    /// Count a change notification
    pub fn record_change(&mut self) {
        *self.change_count.write() += 1;
    }
}
