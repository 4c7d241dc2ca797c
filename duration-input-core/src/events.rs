use tokio::sync::broadcast;

/// Events emitted by a duration input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationEvent {
    /// The committed seconds value changed. Listeners read the new value from the input.
    Changed,
}

/// Broadcast bus for duration input change notifications.
///
/// Cloning shares the underlying channel, so several inputs can report to the
/// same listeners.
#[derive(Debug, Clone)]
pub struct ChangeBus {
    event_tx: broadcast::Sender<DurationEvent>,
}

impl ChangeBus {
    /// Create a new bus
    #[must_use]
    pub fn new() -> Self {
        let (event_tx, _) = broadcast::channel(64);
        Self { event_tx }
    }

    /// Subscribe to change events
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<DurationEvent> {
        self.event_tx.subscribe()
    }

    /// Send a change notification. Having no listeners is not an error.
    pub fn notify(&self, event: DurationEvent) {
        let _ = self.event_tx.send(event);
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.event_tx.receiver_count()
    }
}

impl Default for ChangeBus {
    fn default() -> Self {
        Self::new()
    }
}
