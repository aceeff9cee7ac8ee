//! Identifier generation — injectable so tests can use deterministic ids.
//!
//! A tracer mints one id per span and one per new trace. Any source of
//! practically collision-free strings works; production uses UUID v4.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

// ─── IdGenerator ──────────────────────────────────────────────────────────────

/// Source of unique span / trace identifiers.
///
/// Implementations must be safe to call from many threads at once.
pub trait IdGenerator: Send + Sync {
    /// Produce the next identifier. Must be non-empty.
    fn next_id(&self) -> String;
}

// ─── UuidGenerator ────────────────────────────────────────────────────────────

/// Default generator: random UUID v4 per id.
#[derive(Debug, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

// ─── SequenceGenerator ────────────────────────────────────────────────────────

/// Deterministic generator for tests: `prefix-1`, `prefix-2`, ...
#[derive(Debug)]
pub struct SequenceGenerator {
    prefix: String,
    counter: AtomicU64,
}

impl SequenceGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(0),
        }
    }
}

impl IdGenerator for SequenceGenerator {
    fn next_id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}-{}", self.prefix, n)
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
