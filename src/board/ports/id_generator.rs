//! Identifier generation port.
//!
//! Generators hand out UUIDs that are unique for the lifetime of the
//! process. The store wraps the raw UUID in the typed identifier it needs.

use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Source of unique identifiers.
pub trait IdGenerator: Send + Sync {
    /// Returns a UUID not previously returned by this generator.
    fn generate(&self) -> Uuid;
}

/// Random version 4 UUID generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn generate(&self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Counter-based generator producing `00000000-0000-0000-0000-000000000001`,
/// `...0002`, and so on.
///
/// Deterministic output makes it suitable for tests and reproducible
/// fixtures. Values never repeat within one generator, regardless of call
/// rate.
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    last: AtomicU64,
}

impl SequentialIdGenerator {
    /// Creates a generator whose first value is 1.
    #[must_use]
    pub const fn new() -> Self {
        Self::starting_after(0)
    }

    /// Creates a generator whose first value is `last + 1`.
    #[must_use]
    pub const fn starting_after(last: u64) -> Self {
        Self {
            last: AtomicU64::new(last),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn generate(&self) -> Uuid {
        let next = self.last.fetch_add(1, Ordering::Relaxed).wrapping_add(1);
        Uuid::from_u128(u128::from(next))
    }
}
