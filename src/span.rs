// SPDX-License-Identifier: MIT
//! The `Span` record — one timed operation within a trace.
//!
//! A span is created open (no duration), optionally annotated with metadata
//! by the caller, then finished exactly once. Finishing hands ownership to
//! the recorder's buffer; from that point the span is immutable and `read`
//! returns clones.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use serde::Serialize;

// ─── Span ─────────────────────────────────────────────────────────────────────

/// One recorded operation.
///
/// `duration` is `None` while the span is open and set exactly once when the
/// tracer finishes it. The elapsed time is measured against a monotonic clock
/// captured at creation, so a wall-clock step can never yield a negative
/// duration; `started_at` is the wall-clock timestamp kept for display and
/// time-window queries.
#[derive(Debug, Clone, Serialize)]
pub struct Span {
    /// Unique id of this span, assigned at creation.
    pub id: String,
    /// Id shared by every span of the same logical request.
    pub trace_id: String,
    /// Id of the causally preceding span in the same trace. `None` for roots.
    pub parent_id: Option<String>,
    /// Caller-supplied label.
    pub name: String,
    /// Wall-clock creation time.
    pub started_at: DateTime<Utc>,
    /// Elapsed time, set on finish. `None` while the span is open.
    pub duration: Option<Duration>,
    /// Free-form string annotations, mutable by the caller while open.
    pub metadata: HashMap<String, String>,
    /// Monotonic creation instant; the duration source.
    #[serde(skip)]
    pub(crate) started: Instant,
}

impl Span {
    /// Build a fresh open span. Called by tracers, not by application code.
    pub(crate) fn new(
        id: String,
        trace_id: String,
        parent_id: Option<String>,
        name: &str,
    ) -> Self {
        Self {
            id,
            trace_id,
            parent_id,
            name: name.to_string(),
            started_at: Utc::now(),
            duration: None,
            metadata: HashMap::new(),
            started: Instant::now(),
        }
    }

    /// `true` once the span has been finished.
    pub fn is_finished(&self) -> bool {
        self.duration.is_some()
    }

    /// `true` when this span starts its trace (no parent).
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Attach a metadata entry. Valid only while the span is open.
    pub fn set_metadata(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.metadata.insert(key.into(), value.into());
    }

    /// Seal the span with its elapsed time. Called by tracers on finish.
    pub(crate) fn complete(&mut self) {
        self.duration = Some(self.started.elapsed());
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
