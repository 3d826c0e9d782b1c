//! Marriage pair model and deduplication

use std::collections::HashSet;

/// An unordered pair of spouse identifiers
///
/// Stored in canonical (sorted) order so `(A, B)` and `(B, A)` compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MarriagePair {
    first: String,
    second: String,
}

impl MarriagePair {
    /// Build the canonical pair for two identifiers
    #[must_use]
    pub fn new(a: &str, b: &str) -> Self {
        let (first, second) = if a <= b { (a, b) } else { (b, a) };
        Self {
            first: first.to_string(),
            second: second.to_string(),
        }
    }

    /// The lexicographically smaller identifier
    #[must_use]
    pub fn first(&self) -> &str {
        &self.first
    }

    /// The lexicographically larger identifier
    #[must_use]
    pub fn second(&self) -> &str {
        &self.second
    }
}

/// Tracks which spouse pairs have already been emitted during one conversion
#[derive(Debug, Default)]
pub struct MarriageRegistry {
    seen: HashSet<MarriagePair>,
}

impl MarriageRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pair. Returns `true` the first time the pair is seen in either order.
    pub fn register(&mut self, a: &str, b: &str) -> bool {
        self.seen.insert(MarriagePair::new(a, b))
    }

    /// Number of distinct pairs registered
    #[must_use]
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Whether no pairs have been registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
