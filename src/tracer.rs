// SPDX-License-Identifier: MIT
//! The tracer capability — the contract every span-recording backend meets.
//!
//! The in-memory recorder in [`crate::memory`] is one backend; a no-op
//! sibling lives in [`crate::noop`], and exporting backends would implement
//! the same trait. Applications construct a concrete backend explicitly and
//! pass it by reference (`Arc<dyn Tracer>`) to whatever needs it — there is
//! no process-wide tracer instance.

use std::sync::Arc;

use thiserror::Error;

use crate::context::TraceContext;
use crate::id::{IdGenerator, UuidGenerator};
use crate::span::Span;

/// Spans retained when no [`TracerOptions::buffer_size`] is given: the last
/// 64 finished operations.
pub const DEFAULT_BUFFER_SIZE: usize = 64;

// ─── Errors ───────────────────────────────────────────────────────────────────

/// Failure reported by a tracer backend.
///
/// The in-memory backend never produces one; the variant is reserved so
/// backends with a fallible store (network exporters, disks) can report
/// failure through the same `finish` signature.
#[derive(Debug, Error)]
pub enum TraceError {
    /// The backing span store could not accept the span.
    #[error("span store unavailable: {reason}")]
    Store { reason: String },
}

// ─── Tracer ───────────────────────────────────────────────────────────────────

/// Capability set shared by all span-recording backends.
pub trait Tracer: Send + Sync {
    /// Begin a span named `name`.
    ///
    /// With no ambient context the span roots a new trace; otherwise it
    /// joins the ambient trace, parented to the span in scope. Returns the
    /// open span together with the outgoing context `(trace_id, span_id)`
    /// to thread into nested calls. Never fails.
    fn start(&self, ambient: Option<&TraceContext>, name: &str) -> (TraceContext, Span);

    /// Complete `span`, fixing its duration and handing it to the backend.
    ///
    /// Consumes the span: once finished it belongs to the store and the
    /// caller keeps no handle to mutate. Finishing a span obtained from
    /// `read` (already finished) is a caller contract violation and is not
    /// detected.
    fn finish(&self, span: Span) -> Result<(), TraceError>;

    /// Snapshot of retained spans, oldest first, per `opts`.
    ///
    /// Never fails; no matches yields an empty vec.
    fn read(&self, opts: ReadOptions) -> Vec<Span>;
}

// ─── Options ──────────────────────────────────────────────────────────────────

/// Construction options for a tracer backend.
#[derive(Clone)]
pub struct TracerOptions {
    /// Maximum finished spans retained before the oldest is evicted.
    pub buffer_size: usize,
    /// Id source for spans and traces. Swap in a deterministic generator
    /// for tests.
    pub id_generator: Arc<dyn IdGenerator>,
}

impl Default for TracerOptions {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
            id_generator: Arc::new(UuidGenerator),
        }
    }
}

impl TracerOptions {
    pub fn buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }

    pub fn id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.id_generator = ids;
        self
    }
}

impl std::fmt::Debug for TracerOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TracerOptions")
            .field("buffer_size", &self.buffer_size)
            .finish_non_exhaustive()
    }
}

/// Filters applied by [`Tracer::read`].
#[derive(Debug, Clone, Default)]
pub struct ReadOptions {
    /// Keep only spans belonging to this trace.
    pub trace: Option<String>,
    /// Keep only the most recent `n` spans after filtering.
    pub limit: Option<usize>,
}

impl ReadOptions {
    pub fn trace(mut self, trace_id: impl Into<String>) -> Self {
        self.trace = Some(trace_id.into());
        self
    }

    pub fn limit(mut self, n: usize) -> Self {
        self.limit = Some(n);
        self
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
