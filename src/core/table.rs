// --- File: src/core/table.rs
use crate::core::inverse::InverseIndex;
use crate::core::types::{is_valid_sequence, normalize_key, Sequence, SPACE, WORD_SEPARATOR};
use crate::error::{MorseError, Result};
use std::collections::HashMap;

/// The built-in alphabet every session starts from.
const DEFAULT_SYMBOLS: [(char, &str); 41] = [
    ('A', ".-"), ('B', "-..."), ('C', "-.-."), ('D', "-.."),
    ('E', "."), ('F', "..-."), ('G', "--."), ('H', "...."),
    ('I', ".."), ('J', ".---"), ('K', "-.-"), ('L', ".-.."),
    ('M', "--"), ('N', "-."), ('O', "---"), ('P', ".--."),
    ('Q', "--.-"), ('R', ".-."), ('S', "..."), ('T', "-"),
    ('U', "..-"), ('V', "...-"), ('W', ".--"), ('X', "-..-"),
    ('Y', "-.--"), ('Z', "--.."),
    ('0', "-----"), ('1', ".----"), ('2', "..---"), ('3', "...--"),
    ('4', "....-"), ('5', "....."), ('6', "-...."), ('7', "--..."),
    ('8', "---.."), ('9', "----."),
    ('.', ".-.-.-"), (',', "--..--"), ('?', "..--.."), ('\'', ".----."),
    ('!', "-.-.--"),
];

#[derive(Debug, Clone)]
struct Entry {
    sequence: Sequence,
    /// Monotonic write counter. The inverse index replays entries in this
    /// order so the most recent write owns a shared sequence.
    revision: u64,
}

/// The editable character -> sequence alphabet, together with the decode
/// index derived from it. Every mutation rebuilds the index before returning.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    entries: HashMap<char, Entry>,
    inverse: InverseIndex,
    next_revision: u64,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolTable {
    /// Builds the default table: A-Z, 0-9, five punctuation marks and space.
    pub fn new() -> Self {
        let mut table = Self {
            entries: HashMap::with_capacity(DEFAULT_SYMBOLS.len() + 1),
            inverse: InverseIndex::default(),
            next_revision: 0,
        };
        for (symbol, sequence) in DEFAULT_SYMBOLS {
            table.insert_entry(symbol, sequence.to_string());
        }
        table.insert_entry(SPACE, WORD_SEPARATOR.to_string());
        table.rebuild_inverse();
        table
    }

    /// Case-insensitive lookup of a character's sequence.
    pub fn get(&self, symbol: char) -> Option<&str> {
        self.entries
            .get(&normalize_key(symbol))
            .map(|entry| entry.sequence.as_str())
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.entries.contains_key(&normalize_key(symbol))
    }

    /// Inserts or overwrites a mapping. The sequence is validated before
    /// anything is touched, so a rejected call leaves the table as it was.
    pub fn put(&mut self, symbol: char, sequence: &str) -> Result<()> {
        let key = normalize_key(symbol);
        if !is_valid_sequence(sequence) {
            tracing::warn!(symbol = ?key, sequence, "rejected malformed sequence");
            return Err(MorseError::InvalidFormat {
                symbol: key,
                sequence: sequence.to_string(),
            });
        }
        if key == SPACE {
            tracing::warn!("rejected attempt to remap the word separator");
            return Err(MorseError::ProtectedSymbol(key));
        }

        let previous = self.insert_entry(key, sequence.to_string());
        self.rebuild_inverse();
        tracing::info!(symbol = ?key, sequence, ?previous, "mapping stored");
        Ok(())
    }

    /// Removes a mapping and reports whether one existed. The space mapping
    /// is never removed.
    pub fn remove(&mut self, symbol: char) -> bool {
        let key = normalize_key(symbol);
        if key == SPACE {
            tracing::warn!("refused to remove the word separator mapping");
            return false;
        }
        match self.entries.remove(&key) {
            Some(entry) => {
                self.rebuild_inverse();
                tracing::info!(symbol = ?key, sequence = %entry.sequence, "mapping removed");
                true
            }
            None => false,
        }
    }

    /// An owned copy of every mapping, sorted by character.
    pub fn snapshot(&self) -> Vec<(char, Sequence)> {
        let mut mappings: Vec<(char, Sequence)> = self
            .entries
            .iter()
            .map(|(&symbol, entry)| (symbol, entry.sequence.clone()))
            .collect();
        mappings.sort_by_key(|&(symbol, _)| symbol);
        mappings
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Read access to the derived decode index.
    pub fn inverse(&self) -> &InverseIndex {
        &self.inverse
    }

    fn insert_entry(&mut self, symbol: char, sequence: Sequence) -> Option<Sequence> {
        let revision = self.next_revision;
        self.next_revision += 1;
        self.entries
            .insert(symbol, Entry { sequence, revision })
            .map(|old| old.sequence)
    }

    fn rebuild_inverse(&mut self) {
        let mut ordered: Vec<(&char, &Entry)> = self.entries.iter().collect();
        ordered.sort_by_key(|(_, entry)| entry.revision);
        self.inverse = InverseIndex::rebuild(
            ordered
                .into_iter()
                .map(|(&symbol, entry)| (symbol, entry.sequence.as_str())),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_has_42_entries() {
        let table = SymbolTable::new();
        assert_eq!(table.len(), 42);
        assert_eq!(table.get('S'), Some("..."));
        assert_eq!(table.get(' '), Some(WORD_SEPARATOR));
    }

    #[test]
    fn get_is_case_insensitive() {
        let table = SymbolTable::new();
        assert_eq!(table.get('a'), table.get('A'));
        assert!(table.contains('q'));
        assert_eq!(table.get('#'), None);
    }

    #[test]
    fn put_uppercases_key_and_overwrites() {
        let mut table = SymbolTable::new();
        table.put('e', "..-..").unwrap();
        assert_eq!(table.get('E'), Some("..-.."));
        assert_eq!(table.len(), 42);

        table.put('#', "..--.-").unwrap();
        assert_eq!(table.get('#'), Some("..--.-"));
        assert_eq!(table.len(), 43);
    }

    #[test]
    fn put_rejects_bad_sequences_without_mutating() {
        let mut table = SymbolTable::new();
        let before = table.snapshot();

        for bad in ["", "abc", ".-x", "/", ". ."] {
            let err = table.put('A', bad).unwrap_err();
            assert!(matches!(err, MorseError::InvalidFormat { symbol: 'A', .. }));
        }

        assert_eq!(table.snapshot(), before);
        assert_eq!(table.inverse().get(".-"), Some('A'));
    }

    #[test]
    fn space_mapping_is_protected() {
        let mut table = SymbolTable::new();
        assert!(!table.remove(' '));
        assert_eq!(
            table.put(' ', "..--"),
            Err(MorseError::ProtectedSymbol(' '))
        );
        assert!(matches!(
            table.put(' ', "abc"),
            Err(MorseError::InvalidFormat { .. })
        ));
        assert_eq!(table.get(' '), Some(WORD_SEPARATOR));
    }

    #[test]
    fn remove_reports_presence_and_updates_index() {
        let mut table = SymbolTable::new();
        assert!(table.remove('q'));
        assert!(!table.remove('Q'));
        assert_eq!(table.get('Q'), None);
        assert_eq!(table.inverse().get("--.-"), None);
    }

    #[test]
    fn snapshot_is_sorted_by_character() {
        let table = SymbolTable::new();
        let snapshot = table.snapshot();
        assert_eq!(snapshot.first().map(|(c, _)| *c), Some(' '));
        assert!(snapshot.windows(2).all(|pair| pair[0].0 < pair[1].0));
    }

    #[test]
    fn most_recent_write_owns_a_shared_sequence() {
        let mut table = SymbolTable::new();
        table.put('E', "--").unwrap();
        assert_eq!(table.inverse().get("--"), Some('E'));
        assert_eq!(table.inverse().get("."), None);

        table.put('M', "--").unwrap();
        assert_eq!(table.inverse().get("--"), Some('M'));
    }
}
