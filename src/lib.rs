// SPDX-License-Identifier: MIT
//! spanbuf — bounded in-memory span recorder for distributed-tracing
//! instrumentation.
//!
//! Applications mark the start and end of logical operations ("spans");
//! spans are linked to their trace and to their direct caller, and only the
//! most recent fixed number of finished spans is retained for inspection.
//! Retention is a circular buffer: once full, the oldest span is silently
//! evicted to admit a new one.
//!
//! ```
//! use spanbuf::{MemoryTracer, ReadOptions, Tracer, TracerOptions};
//!
//! let tracer = MemoryTracer::new(TracerOptions::default().buffer_size(128));
//!
//! // Root span: no ambient context, so a new trace begins.
//! let (ctx, mut span) = tracer.start(None, "handle_request");
//! span.set_metadata("peer", "10.0.0.7");
//!
//! // Nested work threads the outgoing context forward.
//! let (_inner_ctx, inner) = tracer.start(Some(&ctx), "query_db");
//! assert_eq!(inner.trace_id, span.trace_id);
//!
//! tracer.finish(inner).unwrap();
//! tracer.finish(span).unwrap();
//!
//! let recorded = tracer.read(ReadOptions::default().trace(ctx.trace_id()));
//! assert_eq!(recorded.len(), 2);
//! ```
//!
//! There is no process-wide tracer: construct a backend explicitly and pass
//! it (typically as `Arc<dyn Tracer>`) to whatever needs it. [`NoopTracer`]
//! is the drop-in backend for builds where recording is disabled.

pub mod buffer;
pub mod context;
pub mod id;
pub mod memory;
pub mod noop;
pub mod span;
pub mod tracer;

pub use buffer::SpanBuffer;
pub use context::TraceContext;
pub use id::{IdGenerator, SequenceGenerator, UuidGenerator};
pub use memory::MemoryTracer;
pub use noop::NoopTracer;
pub use span::Span;
pub use tracer::{ReadOptions, TraceError, Tracer, TracerOptions, DEFAULT_BUFFER_SIZE};
