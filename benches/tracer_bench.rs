//! Criterion benchmarks for the span recorder hot paths.
//!
//! Run with:
//!   cargo bench
//!
//! Covers:
//!   - start + finish of a root span (id generation + buffer insert)
//!   - finish into a full buffer (eviction path)
//!   - read snapshot with and without a trace filter

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use spanbuf::{MemoryTracer, ReadOptions, Tracer, TracerOptions};

// ─── Span lifecycle ───────────────────────────────────────────────────────────

fn bench_start_finish(c: &mut Criterion) {
    let tracer = MemoryTracer::new(TracerOptions::default().buffer_size(1024));

    c.bench_function("span_start_finish_root", |b| {
        b.iter(|| {
            let (_, span) = tracer.start(None, black_box("bench_op"));
            tracer.finish(span).unwrap();
        });
    });

    c.bench_function("span_start_finish_child", |b| {
        let (ctx, root) = tracer.start(None, "root");
        tracer.finish(root).unwrap();
        b.iter(|| {
            let (_, span) = tracer.start(Some(black_box(&ctx)), "child");
            tracer.finish(span).unwrap();
        });
    });
}

fn bench_eviction(c: &mut Criterion) {
    // Tiny buffer so every finish goes through the eviction branch.
    let tracer = MemoryTracer::new(TracerOptions::default().buffer_size(8));
    for _ in 0..8 {
        let (_, span) = tracer.start(None, "fill");
        tracer.finish(span).unwrap();
    }

    c.bench_function("span_finish_with_eviction", |b| {
        b.iter(|| {
            let (_, span) = tracer.start(None, black_box("overflow"));
            tracer.finish(span).unwrap();
        });
    });
}

// ─── Read path ────────────────────────────────────────────────────────────────

fn bench_read(c: &mut Criterion) {
    let tracer = MemoryTracer::new(TracerOptions::default().buffer_size(256));
    let (ctx, root) = tracer.start(None, "root");
    let trace_id = ctx.trace_id().to_string();
    tracer.finish(root).unwrap();
    for i in 0..255 {
        let parent = if i % 2 == 0 { Some(&ctx) } else { None };
        let (_, span) = tracer.start(parent, "filler");
        tracer.finish(span).unwrap();
    }

    c.bench_function("read_full_snapshot", |b| {
        b.iter(|| {
            let spans = tracer.read(black_box(ReadOptions::default()));
            black_box(spans);
        });
    });

    c.bench_function("read_trace_filtered", |b| {
        b.iter(|| {
            let spans = tracer.read(ReadOptions::default().trace(black_box(trace_id.clone())));
            black_box(spans);
        });
    });
}

criterion_group!(benches, bench_start_finish, bench_eviction, bench_read);
criterion_main!(benches);
