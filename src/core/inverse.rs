// File: src/core/inverse.rs
use std::collections::HashMap;

/// Sequence -> character lookup used for decoding. Only ever produced by a
/// full [`InverseIndex::rebuild`]; there is no incremental update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InverseIndex {
    by_sequence: HashMap<String, char>,
}

impl InverseIndex {
    /// Inverts `entries` in iteration order. When two characters share a
    /// sequence the later one wins.
    /// O(n) in the number of entries.
    pub fn rebuild<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (char, &'a str)>,
    {
        let mut by_sequence = HashMap::new();
        for (symbol, sequence) in entries {
            by_sequence.insert(sequence.to_string(), symbol);
        }
        tracing::debug!(entries = by_sequence.len(), "inverse index rebuilt");
        Self { by_sequence }
    }

    pub fn get(&self, sequence: &str) -> Option<char> {
        self.by_sequence.get(sequence).copied()
    }

    pub fn len(&self) -> usize {
        self.by_sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_sequence.is_empty()
    }
}
