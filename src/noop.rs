//! No-op tracer backend — records nothing, propagates everything.
//!
//! Useful as the backend for builds where span recording is disabled:
//! instrumented code keeps threading real trace contexts (so ids stay
//! meaningful if a recording backend is swapped back in) but `finish`
//! discards the span and `read` is always empty.

use crate::context::TraceContext;
use crate::id::{IdGenerator, UuidGenerator};
use crate::span::Span;
use crate::tracer::{ReadOptions, TraceError, Tracer};

/// Tracer that drops every finished span.
pub struct NoopTracer {
    ids: UuidGenerator,
}

impl NoopTracer {
    pub fn new() -> Self {
        Self { ids: UuidGenerator }
    }
}

impl Default for NoopTracer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tracer for NoopTracer {
    fn start(&self, ambient: Option<&TraceContext>, name: &str) -> (TraceContext, Span) {
        let (trace_id, parent_id) = TraceContext::resolve(ambient, &self.ids);
        let span = Span::new(self.ids.next_id(), trace_id, parent_id, name);
        let outgoing = TraceContext::new(span.trace_id.clone(), span.id.clone());
        (outgoing, span)
    }

    fn finish(&self, _span: Span) -> Result<(), TraceError> {
        Ok(())
    }

    fn read(&self, _opts: ReadOptions) -> Vec<Span> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_records_nothing() {
        let tracer = NoopTracer::new();
        let (_, span) = tracer.start(None, "op");
        tracer.finish(span).unwrap();
        assert!(tracer.read(ReadOptions::default()).is_empty());
    }

    #[test]
    fn test_noop_still_propagates_trace_identity() {
        let tracer = NoopTracer::new();
        let (ctx, outer) = tracer.start(None, "outer");
        let (_, inner) = tracer.start(Some(&ctx), "inner");

        assert_eq!(inner.trace_id, outer.trace_id);
        assert_eq!(inner.parent_id.as_deref(), Some(outer.id.as_str()));
    }
}
