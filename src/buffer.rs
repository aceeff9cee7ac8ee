// SPDX-License-Identifier: MIT
//! Fixed-capacity circular store of finished spans.
//!
//! Holds at most `capacity` spans; inserting into a full buffer silently
//! drops the single oldest entry. Eviction is a retention tradeoff, not a
//! failure — nobody is notified beyond a `debug!` log line. Reads are
//! point-in-time snapshots, never live views.

use std::collections::VecDeque;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::span::Span;

// ─── SpanBuffer ───────────────────────────────────────────────────────────────

/// Bounded ring of completed spans, oldest first.
///
/// All methods take `&self`; the interior `Mutex` is held only for the
/// duration of a single insert or snapshot, so concurrent writers and
/// readers serialize on the buffer alone and never observe a half-applied
/// insert or eviction.
#[derive(Debug)]
pub struct SpanBuffer {
    capacity: usize,
    entries: Mutex<VecDeque<Span>>,
}

impl SpanBuffer {
    /// Create a buffer retaining at most `capacity` spans.
    ///
    /// Capacity is fixed for the lifetime of the buffer. A capacity of zero
    /// is clamped to one so that `put` always has room for the newest span.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    /// Insert one finished span, evicting the oldest entry when full. O(1).
    pub fn put(&self, span: Span) {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        if entries.len() == self.capacity {
            if let Some(evicted) = entries.pop_front() {
                debug!(
                    span_id = %evicted.id,
                    trace_id = %evicted.trace_id,
                    "span buffer full, evicting oldest entry"
                );
            }
        }
        entries.push_back(span);
    }

    /// Snapshot of every retained span, oldest to newest.
    pub fn snapshot(&self) -> Vec<Span> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.iter().cloned().collect()
    }

    /// Snapshot of the most recent `n` spans, oldest of those first.
    pub fn recent(&self, n: usize) -> Vec<Span> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        let skip = entries.len().saturating_sub(n);
        entries.iter().skip(skip).cloned().collect()
    }

    /// Snapshot of spans started at or after `cutoff`, oldest first.
    pub fn since(&self, cutoff: DateTime<Utc>) -> Vec<Span> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries
            .iter()
            .filter(|s| s.started_at >= cutoff)
            .cloned()
            .collect()
    }

    /// Number of spans currently retained.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The fixed retention capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
