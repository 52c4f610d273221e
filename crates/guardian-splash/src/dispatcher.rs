//! Dispatcher allows middleware and tasks to dispatch actions back to the store

use crate::actions::Action;
use tokio::sync::mpsc;

/// Dispatcher for sending actions to the store loop
///
/// Actions are queued and processed in order, each one only after the
/// previous action has been reduced and published.
#[derive(Clone, Debug)]
pub struct Dispatcher {
    tx: mpsc::UnboundedSender<Action>,
}

impl Dispatcher {
    pub fn new(tx: mpsc::UnboundedSender<Action>) -> Self {
        Self { tx }
    }

    /// Queue an action for the store loop
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.tx.send(action) {
            // Store loop is gone, which only happens after teardown
            log::debug!("Dropped action after store shutdown: {:?}", e.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatcher() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let dispatcher = Dispatcher::new(tx);

        dispatcher.dispatch(Action::Start);

        assert_eq!(rx.try_recv().ok(), Some(Action::Start));
    }

    #[test]
    fn test_dispatch_after_receiver_dropped() {
        let (tx, rx) = mpsc::unbounded_channel();
        let dispatcher = Dispatcher::new(tx);
        drop(rx);

        // Must not panic
        dispatcher.dispatch(Action::Dispose);
    }
}
