//! FIFO queue of canned responses waiting for their reply delay to elapse.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Reply delay of the original chat box, in milliseconds.
pub const DEFAULT_RESPONSE_DELAY_MS: u64 = 200;

/// A canned reply and the logical time it becomes visible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingResponse {
    pub text: String,
    pub due_at_ms: u64,
}

/// Replies in scheduling order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseQueue {
    entries: VecDeque<PendingResponse>,
}

impl ResponseQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends a reply behind every earlier one.
    pub fn schedule(&mut self, text: impl Into<String>, due_at_ms: u64) {
        self.entries.push_back(PendingResponse {
            text: text.into(),
            due_at_ms,
        });
    }

    /// Due time of the head entry, if any.
    pub fn next_due_at_ms(&self) -> Option<u64> {
        self.entries.front().map(|entry| entry.due_at_ms)
    }

    /// Pops entries from the head while they are due.
    ///
    /// Delivery stops at the first entry that is not yet due, so a response is
    /// never appended ahead of one scheduled before it.
    pub fn drain_due(&mut self, now_ms: u64) -> Vec<PendingResponse> {
        let mut due = Vec::new();
        while self
            .entries
            .front()
            .is_some_and(|entry| entry.due_at_ms <= now_ms)
        {
            if let Some(entry) = self.entries.pop_front() {
                due.push(entry);
            }
        }
        due
    }
}
