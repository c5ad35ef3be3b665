//! Identifier generation.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// Source of unique identifiers for entities.
pub trait IdGenerator: Send + Sync {
    /// Returns a new identifier, distinct from every earlier one.
    fn generate(&self) -> Uuid;
}

/// Generates random (version 4) UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn generate(&self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Generates UUIDs from an incrementing counter.
///
/// Deterministic, so tests can assert on exact identifiers.
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl SequentialIdGenerator {
    /// Creates a generator whose first identifier is `start`.
    pub fn starting_at(start: u64) -> Self {
        Self {
            next: AtomicU64::new(start),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn generate(&self) -> Uuid {
        Uuid::from_u128(u128::from(self.next.fetch_add(1, Ordering::Relaxed)))
    }
}

impl<G: IdGenerator + ?Sized> IdGenerator for &G {
    fn generate(&self) -> Uuid {
        (**self).generate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_generator_creates_unique_ids() {
        let ids = RandomIdGenerator;
        let id1 = ids.generate();
        let id2 = ids.generate();
        assert_ne!(id1, id2);
        assert_eq!(id1.get_version_num(), 4);
    }

    #[test]
    fn sequential_generator_is_deterministic() {
        let ids = SequentialIdGenerator::starting_at(7);
        assert_eq!(ids.generate(), Uuid::from_u128(7));
        assert_eq!(ids.generate(), Uuid::from_u128(8));
    }

    #[test]
    fn sequential_generator_defaults_to_zero() {
        let ids = SequentialIdGenerator::default();
        assert_eq!(ids.generate(), Uuid::nil());
    }
}
