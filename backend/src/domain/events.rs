//! Goal lifecycle notifications.
//!
//! The goal store reports completions through a [`GoalEventSink`]. Delivery is
//! fire-and-forget: a sink with no listener, or a listener that lags behind,
//! never affects stored goal state.

use tokio::sync::broadcast;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalEvent {
    /// A goal reached its total; the presentation layer plays its celebration
    Completed { goal_id: u64, text: String },
}

pub trait GoalEventSink: Send + Sync {
    fn notify(&self, event: GoalEvent);
}

/// Sink that drops every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEventSink;

impl GoalEventSink for NoopEventSink {
    fn notify(&self, _event: GoalEvent) {}
}

/// Sink that fans events out to any number of subscribers
#[derive(Debug, Clone)]
pub struct BroadcastEventSink {
    sender: broadcast::Sender<GoalEvent>,
}

impl BroadcastEventSink {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<GoalEvent> {
        self.sender.subscribe()
    }
}

impl GoalEventSink for BroadcastEventSink {
    fn notify(&self, event: GoalEvent) {
        // No receivers is fine
        if self.sender.send(event).is_err() {
            log::debug!("🎉 Celebration dropped, nobody is listening");
        }
    }
}

#[cfg(test)]
pub(crate) mod test_utils {
    use super::*;
    use std::sync::Mutex;

    /// Sink that keeps every event for assertions
    #[derive(Debug, Default)]
    pub struct RecordingSink {
        events: Mutex<Vec<GoalEvent>>,
    }

    impl RecordingSink {
        pub fn events(&self) -> Vec<GoalEvent> {
            self.events.lock().unwrap().clone()
        }
    }

    impl GoalEventSink for RecordingSink {
        fn notify(&self, event: GoalEvent) {
            self.events.lock().unwrap().push(event);
        }
    }
}
