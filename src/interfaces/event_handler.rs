// ============================================================================
// Event Handler Interface
// Defines the contract for observing conversions
// ============================================================================

use crate::numeric::{ConversionError, Radix};
use chrono::{DateTime, Utc};
use parking_lot::Mutex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by a [`RadixConverter`](crate::engine::RadixConverter)
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ConversionEvent {
    /// Conversion succeeded
    Converted {
        from: Radix,
        to: Radix,
        input: String,
        output: String,
        timestamp: DateTime<Utc>,
    },

    /// Conversion rejected with reason; `input` is `None` for an absent string
    Rejected {
        from: Radix,
        to: Radix,
        input: Option<String>,
        error: ConversionError,
        timestamp: DateTime<Utc>,
    },
}

impl ConversionEvent {
    /// Source and target radix of the conversion
    pub fn direction(&self) -> (Radix, Radix) {
        match self {
            ConversionEvent::Converted { from, to, .. }
            | ConversionEvent::Rejected { from, to, .. } => (*from, *to),
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, ConversionEvent::Rejected { .. })
    }
}

/// Event handler trait for processing conversion events
/// Implementations can handle logging, metrics, auditing, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a conversion event
    fn on_event(&self, event: ConversionEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<ConversionEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: ConversionEvent) {
        // Do nothing
    }
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: ConversionEvent) {
        match &event {
            ConversionEvent::Converted { .. } => {
                tracing::debug!("Conversion event: {:?}", event);
            },
            ConversionEvent::Rejected { from, to, error, .. } => {
                tracing::debug!(%from, %to, %error, "Conversion rejected");
            },
        }
    }
}

/// Event handler that keeps every event in memory
#[derive(Default)]
pub struct RecordingEventHandler {
    events: Mutex<Vec<ConversionEvent>>,
}

impl RecordingEventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded events, oldest first
    pub fn events(&self) -> Vec<ConversionEvent> {
        self.events.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    /// Drain the recorded events
    pub fn take(&self) -> Vec<ConversionEvent> {
        std::mem::take(&mut *self.events.lock())
    }
}

impl EventHandler for RecordingEventHandler {
    fn on_event(&self, event: ConversionEvent) {
        self.events.lock().push(event);
    }

    fn on_events(&self, events: Vec<ConversionEvent>) {
        self.events.lock().extend(events);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejected() -> ConversionEvent {
        ConversionEvent::Rejected {
            from: Radix::Hex,
            to: Radix::Binary,
            input: None,
            error: ConversionError::NullArgument,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_noop_handler() {
        let handler = NoOpEventHandler;
        handler.on_event(rejected());
        // Should not panic
    }

    #[test]
    fn test_logging_handler() {
        let handler = LoggingEventHandler;
        handler.on_events(vec![
            rejected(),
            ConversionEvent::Converted {
                from: Radix::Binary,
                to: Radix::Decimal,
                input: "0b1".to_string(),
                output: "1".to_string(),
                timestamp: Utc::now(),
            },
        ]);
    }

    #[test]
    fn test_recording_handler() {
        let handler = RecordingEventHandler::new();
        assert!(handler.is_empty());

        handler.on_event(rejected());
        handler.on_events(vec![rejected(), rejected()]);
        assert_eq!(handler.len(), 3);

        let events = handler.take();
        assert_eq!(events.len(), 3);
        assert!(events.iter().all(ConversionEvent::is_rejected));
        assert_eq!(events[0].direction(), (Radix::Hex, Radix::Binary));
        assert!(handler.is_empty());
    }
}
