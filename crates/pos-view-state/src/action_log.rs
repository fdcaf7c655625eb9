//! # Action Log
//!
//! Sink for operator actions worth auditing. Only applied changes are
//! recorded; a refused action leaves no entry.

use std::sync::{Mutex, PoisonError};

use pos_view_core::ZoomDirection;
use serde::{Deserialize, Serialize};
use tracing::info;

/// One audited operator action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum ActionLogEntry {
    /// Base font size changed.
    #[serde(rename_all = "camelCase")]
    Zoom {
        direction: ZoomDirection,
        new_size: u32,
    },
}

/// Receives action log entries.
pub trait ActionLog: Send + Sync {
    fn record(&self, entry: ActionLogEntry);
}

/// Writes entries to the tracing subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingActionLog;

impl ActionLog for TracingActionLog {
    fn record(&self, entry: ActionLogEntry) {
        match entry {
            ActionLogEntry::Zoom {
                direction,
                new_size,
            } => info!(%direction, new_size, "zoom"),
        }
    }
}

/// Keeps entries in memory.
#[derive(Debug, Default)]
pub struct MemoryActionLog {
    entries: Mutex<Vec<ActionLogEntry>>,
}

impl MemoryActionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<ActionLogEntry> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl ActionLog for MemoryActionLog {
    fn record(&self, entry: ActionLogEntry) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_entry_shape() {
        let entry = ActionLogEntry::Zoom {
            direction: ZoomDirection::In,
            new_size: 17,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["action"], "zoom");
        assert_eq!(json["direction"], "in");
        assert_eq!(json["newSize"], 17);
    }

    #[test]
    fn test_memory_log_keeps_order() {
        let log = MemoryActionLog::new();
        log.record(ActionLogEntry::Zoom {
            direction: ZoomDirection::In,
            new_size: 17,
        });
        log.record(ActionLogEntry::Zoom {
            direction: ZoomDirection::Out,
            new_size: 16,
        });
        assert_eq!(log.entries().len(), 2);
    }
}
