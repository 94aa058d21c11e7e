//! In-memory logger used to observe what components emit

use crate::{Level, Logger};
use std::sync::Mutex;

/// Logger that keeps every line it receives, in order
///
/// Intended for tests and for callers that want to inspect output after
/// the fact. Safe to share between threads, although the demos never do.
#[derive(Debug, Default)]
pub struct MemoryLogger {
    records: Mutex<Vec<(Level, String)>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all captured records
    pub fn records(&self) -> Vec<(Level, String)> {
        self.lock().clone()
    }

    /// Snapshot of the captured messages without their levels
    pub fn messages(&self) -> Vec<String> {
        self.lock().iter().map(|(_, m)| m.clone()).collect()
    }

    /// Number of captured records
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drop everything captured so far
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<(Level, String)>> {
        // A poisoned lock still holds valid lines
        self.records.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Logger for MemoryLogger {
    fn log(&self, level: Level, message: &str) {
        self.lock().push((level, message.to_string()));
    }
}
