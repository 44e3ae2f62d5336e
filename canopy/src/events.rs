//! Outbound notifications from the engine to its host.
//!
//! The engine reports every state change synchronously through a
//! [`TreeEventSink`]. Sinks shipped here:
//! - [`NoopEventSink`]: drops everything (the default)
//! - [`EventLog`]: records events for later inspection
//! - [`JsonEventSink`]: NDJSON stream for scripted hosts
//! - any `FnMut(&TreeEvent)` closure

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

/// A state change the host should reflect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeEvent {
    /// A node's children were shown or hidden
    ExpandChanged { node_id: String, expanded: bool },
    /// A node's selection flag was written by a click
    SelectionChanged { node_id: String, selected: bool },
    /// A node was activated by the user. Always the last event of a click.
    NodeActivated { node_id: String },
}

impl TreeEvent {
    /// The id of the node this event is about.
    pub fn node_id(&self) -> &str {
        match self {
            TreeEvent::ExpandChanged { node_id, .. }
            | TreeEvent::SelectionChanged { node_id, .. }
            | TreeEvent::NodeActivated { node_id } => node_id,
        }
    }

    /// Wire name used in the NDJSON stream.
    pub fn name(&self) -> &'static str {
        match self {
            TreeEvent::ExpandChanged { .. } => "expand_changed",
            TreeEvent::SelectionChanged { .. } => "selection_changed",
            TreeEvent::NodeActivated { .. } => "node_activated",
        }
    }

    /// JSON representation of this event.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            TreeEvent::ExpandChanged { node_id, expanded } => serde_json::json!({
                "event": self.name(),
                "node": node_id,
                "expanded": expanded,
            }),
            TreeEvent::SelectionChanged { node_id, selected } => serde_json::json!({
                "event": self.name(),
                "node": node_id,
                "selected": selected,
            }),
            TreeEvent::NodeActivated { node_id } => serde_json::json!({
                "event": self.name(),
                "node": node_id,
            }),
        }
    }
}

/// Result of handling an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    /// Check if the event was handled.
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

/// Receiver for engine notifications.
pub trait TreeEventSink {
    /// Handle a single event.
    fn on_event(&mut self, event: &TreeEvent);
}

impl<F> TreeEventSink for F
where
    F: FnMut(&TreeEvent),
{
    fn on_event(&mut self, event: &TreeEvent) {
        self(event)
    }
}

/// Sink that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEventSink;

impl TreeEventSink for NoopEventSink {
    fn on_event(&mut self, _event: &TreeEvent) {}
}

/// Recording sink.
///
/// Clones share the same buffer, so a host can hand one clone to the engine
/// and read events back through another.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<TreeEvent>>>,
}

impl EventLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded events, oldest first.
    pub fn events(&self) -> Vec<TreeEvent> {
        self.events.borrow().clone()
    }

    /// Remove and return the recorded events.
    pub fn take(&self) -> Vec<TreeEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    /// Check if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}

impl TreeEventSink for EventLog {
    fn on_event(&mut self, event: &TreeEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}

/// Sink that writes one JSON object per line.
pub struct JsonEventSink {
    writer: Box<dyn Write>,
}

impl JsonEventSink {
    /// Create a sink writing to stdout.
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Create a sink writing to a custom writer.
    pub fn with_writer<W: Write + 'static>(writer: W) -> Self {
        Self {
            writer: Box::new(writer),
        }
    }
}

impl std::fmt::Debug for JsonEventSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonEventSink").finish_non_exhaustive()
    }
}

impl TreeEventSink for JsonEventSink {
    fn on_event(&mut self, event: &TreeEvent) {
        let line = event.to_json();
        if let Err(e) = writeln!(self.writer, "{}", line).and_then(|_| self.writer.flush()) {
            log::warn!("Failed to write {} event: {}", event.name(), e);
        }
    }
}
