//! User-visible activity log.
//!
//! Entries are kept newest-first: `record()` inserts at the head, so
//! `read(0, n)` yields the `n` most recent events without sorting.
//!
//! # Invariants
//! - Entries are append-only; nothing removes or edits an entry.
//! - The log is unbounded for the lifetime of one engine.

use std::collections::VecDeque;

use uuid::Uuid;

use crate::{clock::Clock, types::ActivityLogEntry};

/// Reverse-chronological record of notable dialogue events.
#[derive(Debug, Clone, Default)]
pub struct ActivityLog {
    entries: VecDeque<ActivityLogEntry>,
}

impl ActivityLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `description` at the head of the log, stamped by `clock`.
    pub fn record(&mut self, description: impl Into<String>, clock: &dyn Clock) {
        let entry = ActivityLogEntry {
            id: Uuid::new_v4(),
            timestamp: clock.now(),
            description: description.into(),
        };
        tracing::debug!(description = %entry.description, "activity_log_record");
        self.entries.push_front(entry);
    }

    /// Up to `take` entries after skipping the `skip` most recent ones.
    pub fn read(&self, skip: usize, take: usize) -> Vec<ActivityLogEntry> {
        self.entries.iter().skip(skip).take(take).cloned().collect()
    }

    /// Render the `take` most recent entries, one per line.
    pub fn render_recent(&self, take: usize) -> String {
        if self.entries.is_empty() {
            return "No activity log entries yet.".to_string();
        }
        self.entries
            .iter()
            .take(take)
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Total number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` when nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
