// SPDX-License-Identifier: MIT
//! The in-memory recorder — a [`Tracer`] backed by a circular span buffer.
//!
//! `start` is pure construction and touches no shared state; `finish` and
//! `read` contend only on the buffer's mutex, held for a single insert or
//! snapshot. One recorder is meant to be shared (`Arc`) by every in-flight
//! request of a process.

use tracing::debug;

use crate::buffer::SpanBuffer;
use crate::context::TraceContext;
use crate::span::Span;
use crate::tracer::{ReadOptions, TraceError, Tracer, TracerOptions};

// ─── MemoryTracer ─────────────────────────────────────────────────────────────

/// Bounded-memory span recorder.
///
/// Retains the most recent [`TracerOptions::buffer_size`] finished spans and
/// silently discards older ones. Nothing is persisted or exported; the
/// recording is lost on process exit.
pub struct MemoryTracer {
    opts: TracerOptions,
    buffer: SpanBuffer,
}

impl MemoryTracer {
    /// Construct a recorder with the given options.
    pub fn new(opts: TracerOptions) -> Self {
        let buffer = SpanBuffer::new(opts.buffer_size);
        Self { opts, buffer }
    }

    /// Number of finished spans currently retained.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// The fixed retention capacity.
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }
}

impl Default for MemoryTracer {
    fn default() -> Self {
        Self::new(TracerOptions::default())
    }
}

impl Tracer for MemoryTracer {
    fn start(&self, ambient: Option<&TraceContext>, name: &str) -> (TraceContext, Span) {
        let ids = self.opts.id_generator.as_ref();
        let (trace_id, parent_id) = TraceContext::resolve(ambient, ids);
        let span = Span::new(ids.next_id(), trace_id, parent_id, name);

        // Outgoing context: nested starts inherit this trace, parented here.
        let outgoing = TraceContext::new(span.trace_id.clone(), span.id.clone());
        (outgoing, span)
    }

    fn finish(&self, mut span: Span) -> Result<(), TraceError> {
        span.complete();
        debug!(
            span_id = %span.id,
            trace_id = %span.trace_id,
            name = %span.name,
            duration_us = span.duration.map_or(0, |d| d.as_micros() as u64),
            "span recorded"
        );
        self.buffer.put(span);
        Ok(())
    }

    fn read(&self, opts: ReadOptions) -> Vec<Span> {
        let mut spans = self.buffer.snapshot();

        if let Some(trace_id) = &opts.trace {
            spans.retain(|s| &s.trace_id == trace_id);
        }
        if let Some(limit) = opts.limit {
            let skip = spans.len().saturating_sub(limit);
            spans.drain(..skip);
        }

        spans
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
