//! Filter change events
//!
//! The store reports the complete record after every mutation so an
//! external owner (controlled mode) can apply it.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::CheckedItems;

/// Trait for receiving filter changes
///
/// Implementations can be:
/// - NoopSink: Silent operation
/// - JsonEventSink: NDJSON event stream
/// - any `Fn(&CheckedItems)` closure
pub trait FilterChangeSink: Send + Sync {
    /// Handle the full record after a change
    fn on_filter_change(&self, items: &CheckedItems);
}

/// No-op sink for silent operation
#[derive(Debug, Default)]
pub struct NoopSink;

impl FilterChangeSink for NoopSink {
    fn on_filter_change(&self, _items: &CheckedItems) {
        // Do nothing
    }
}

impl<F> FilterChangeSink for F
where
    F: Fn(&CheckedItems) + Send + Sync,
{
    fn on_filter_change(&self, items: &CheckedItems) {
        self(items)
    }
}

/// Sink that writes each change as one NDJSON line
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }
}

impl FilterChangeSink for JsonEventSink {
    fn on_filter_change(&self, items: &CheckedItems) {
        let event = serde_json::json!({
            "event": "filter_change",
            "filters": items,
        });
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}
