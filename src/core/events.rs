//! Lifecycle events emitted by the flip box.
//!
//! Events are sent over a channel and drained by the host (UI loop,
//! tests, logging). The sender is optional so core types can be built
//! before any receiver exists; emitting on a dummy or disconnected
//! sender is a silent no-op.

use crossbeam_channel::{Receiver, Sender, unbounded};

/// Everything observable about a flip box from the outside.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlipEvent {
    /// Component constructed and attached.
    Created,
    /// Configuration re-applied.
    Updated,
    /// Component torn down, panels returned to the caller.
    Destroyed,
    /// A flip transition started.
    Flipping {
        reverse: bool,
        current_index: usize,
        next_index: usize,
    },
    /// A flip transition completed.
    Flipped {
        reverse: bool,
        prev_index: usize,
        current_index: usize,
    },
    /// Panel inserted at the resolved index.
    Added { index: usize },
    /// Panel removed at the resolved index.
    Removed { index: usize },
    /// Panel overwritten at the resolved index.
    Replaced { index: usize },
}

/// Event sender handle held by the engine and component.
#[derive(Debug, Clone, Default)]
pub struct EventSender {
    sender: Option<Sender<FlipEvent>>,
}

impl EventSender {
    /// Sender connected to a receiver.
    pub fn new(sender: Sender<FlipEvent>) -> Self {
        Self {
            sender: Some(sender),
        }
    }

    /// No-op sender for tests or hosts that don't observe events.
    pub fn dummy() -> Self {
        Self { sender: None }
    }

    /// Emit an event. Send errors are ignored - the receiver may be gone.
    pub fn emit(&self, event: FlipEvent) {
        if let Some(ref tx) = self.sender {
            let _ = tx.send(event);
        }
    }
}

/// Convenience: a connected sender/receiver pair.
pub fn event_channel() -> (EventSender, Receiver<FlipEvent>) {
    let (tx, rx) = unbounded();
    (EventSender::new(tx), rx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_reaches_receiver() {
        let (tx, rx) = event_channel();
        tx.emit(FlipEvent::Created);
        tx.emit(FlipEvent::Added { index: 2 });
        assert_eq!(rx.try_recv(), Ok(FlipEvent::Created));
        assert_eq!(rx.try_recv(), Ok(FlipEvent::Added { index: 2 }));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_dummy_sender_is_silent() {
        let tx = EventSender::dummy();
        tx.emit(FlipEvent::Destroyed);
    }

    #[test]
    fn test_emit_after_receiver_dropped() {
        let (tx, rx) = event_channel();
        drop(rx);
        // Must not panic
        tx.emit(FlipEvent::Updated);
    }
}
