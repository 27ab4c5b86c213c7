//! Cancellation coordination for in-flight queries.

use tokio::sync::broadcast;

/// Coordinator for cooperative cancellation.
///
/// Provides a broadcast channel every outstanding partition fetch subscribes
/// to. A trigger resolves all of them with an explicit cancellation error;
/// a cancelled target never returns a silently truncated table.
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    /// Create a new cancellation coordinator.
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Subscribe to the cancellation signal.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Trigger cancellation of everything subscribed.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }

    /// Number of fetches still listening.
    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
