//! ID generation utilities.

use ulid::Ulid;
use uuid::Uuid;

/// ID generator for entities.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    _private: (),
}

impl IdGenerator {
    /// Create a new ID generator.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }

    /// Generate a new ULID-based ID.
    ///
    /// ULIDs are lexicographically sortable and monotonically increasing
    /// within the same millisecond, which makes "latest vote" queries an
    /// index scan over the primary key.
    #[must_use]
    pub fn generate(&self) -> String {
        Ulid::new().to_string().to_lowercase()
    }

    /// Generate a synthetic account reference.
    ///
    /// Used by the admin ballot-adjustment path: a vote row is inserted
    /// against a fresh random id that corresponds to no real account.
    /// Random UUID v4 so synthetic references never collide with each
    /// other under the (account, item) unique constraint.
    #[must_use]
    pub fn generate_synthetic(&self) -> String {
        format!("ghost-{}", Uuid::new_v4().simple())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_ulid() {
        let id_gen = IdGenerator::new();
        let id1 = id_gen.generate();
        let id2 = id_gen.generate();

        assert_eq!(id1.len(), 26);
        assert_eq!(id2.len(), 26);
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_generate_synthetic() {
        let id_gen = IdGenerator::new();
        let a = id_gen.generate_synthetic();
        let b = id_gen.generate_synthetic();

        assert!(a.starts_with("ghost-"));
        assert_ne!(a, b);
    }
}
