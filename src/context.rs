// SPDX-License-Identifier: MIT
//! Trace-context propagation — how a starting span learns its trace identity.
//!
//! A `TraceContext` is the `(trace_id, span_id)` pair of the span currently
//! in scope. It is an explicit, immutable value threaded through call
//! parameters: every `start` returns a fresh outgoing context for the caller
//! to hand to whatever it does next, and suspension or thread boundaries
//! simply copy the value forward. There is no global or thread-local carrier.

use serde::{Deserialize, Serialize};

use crate::id::IdGenerator;

// ─── TraceContext ─────────────────────────────────────────────────────────────

/// Propagated trace identity: the trace and span currently in scope.
///
/// Immutable once created; starting a span produces a new context rather
/// than mutating the old one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    trace_id: String,
    span_id: String,
}

impl TraceContext {
    /// Build a context from explicit ids (e.g. one received from a caller).
    pub fn new(trace_id: impl Into<String>, span_id: impl Into<String>) -> Self {
        Self {
            trace_id: trace_id.into(),
            span_id: span_id.into(),
        }
    }

    /// Id of the trace this context belongs to.
    pub fn trace_id(&self) -> &str {
        &self.trace_id
    }

    /// Id of the span currently in scope.
    pub fn span_id(&self) -> &str {
        &self.span_id
    }

    /// Resolve `(trace_id, parent_id)` for a span that is about to start.
    ///
    /// No ambient context means the span roots a new trace: a fresh trace id
    /// is minted and there is no parent. With a context present the new span
    /// joins that trace, parented to the span in scope.
    pub(crate) fn resolve(
        ambient: Option<&TraceContext>,
        ids: &dyn IdGenerator,
    ) -> (String, Option<String>) {
        match ambient {
            Some(ctx) => (ctx.trace_id.clone(), Some(ctx.span_id.clone())),
            None => (ids.next_id(), None),
        }
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::SequenceGenerator;

    #[test]
    fn test_resolve_without_ambient_mints_new_trace() {
        let ids = SequenceGenerator::new("t");
        let (trace_id, parent_id) = TraceContext::resolve(None, &ids);
        assert_eq!(trace_id, "t-1");
        assert!(parent_id.is_none());
    }

    #[test]
    fn test_resolve_with_ambient_inherits_trace_and_parent() {
        let ids = SequenceGenerator::new("t");
        let ctx = TraceContext::new("trace-9", "span-4");
        let (trace_id, parent_id) = TraceContext::resolve(Some(&ctx), &ids);
        assert_eq!(trace_id, "trace-9");
        assert_eq!(parent_id.as_deref(), Some("span-4"));
    }

    #[test]
    fn test_context_round_trips_through_json() {
        let ctx = TraceContext::new("t1", "s1");
        let json = serde_json::to_string(&ctx).unwrap();
        let back: TraceContext = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ctx);
    }
}
