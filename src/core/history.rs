// File: src/core/history.rs
use crate::core::types::TranslationRecord;

/// Append-only log of the session's translations, oldest first.
/// Unbounded: a single interactive session never grows it far.
#[derive(Debug, Clone, Default)]
pub struct HistoryLog {
    records: Vec<TranslationRecord>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: TranslationRecord) {
        self.records.push(record);
    }

    /// A copy of every record in insertion order.
    pub fn all(&self) -> Vec<TranslationRecord> {
        self.records.clone()
    }

    pub fn last(&self) -> Option<&TranslationRecord> {
        self.records.last()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
