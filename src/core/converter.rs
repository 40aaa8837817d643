use crate::core::table::SymbolTable;
use crate::core::types::{SYMBOL_JOINER, SPACE, WORD_SEPARATOR};

/// Stateless text <-> Morse converter. It reads the table it is handed and
/// never fails: anything it cannot map becomes the placeholder.
pub struct MorseConverter {
    placeholder: char,
}

impl MorseConverter {
    pub fn new(placeholder: char) -> Self {
        Self { placeholder }
    }

    /// Encodes `text` one character at a time, after upper-casing it.
    pub fn encode(&self, table: &SymbolTable, text: &str) -> String {
        let mut result = String::new();

        for (i, c) in text.to_uppercase().chars().enumerate() {
            if i > 0 {
                result.push_str(SYMBOL_JOINER);
            }
            match table.get(c) {
                Some(sequence) => result.push_str(sequence),
                None => result.push(self.placeholder),
            }
        }

        result
    }

    /// Decodes whitespace-separated sequences. "/" is a word break.
    pub fn decode(&self, table: &SymbolTable, morse: &str) -> String {
        let trimmed = morse.trim();
        if trimmed.is_empty() {
            return String::new();
        }

        trimmed
            .split_whitespace()
            .map(|token| {
                if token == WORD_SEPARATOR {
                    SPACE
                } else {
                    table.inverse().get(token).unwrap_or(self.placeholder)
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn converter() -> MorseConverter {
        MorseConverter::new('?')
    }

    #[test]
    fn encode_joins_sequences_with_single_spaces() {
        let table = SymbolTable::new();
        assert_eq!(converter().encode(&table, "sos"), "... --- ...");
        assert_eq!(converter().encode(&table, "HI YOU"), ".... .. / -.-- --- ..-");
    }

    #[test]
    fn encode_substitutes_placeholder_for_unmapped_characters() {
        let table = SymbolTable::new();
        assert_eq!(converter().encode(&table, "a#b"), ".- ? -...");
        assert_eq!(MorseConverter::new('*').encode(&table, "%"), "*");
    }

    #[test]
    fn decode_collapses_whitespace_runs() {
        let table = SymbolTable::new();
        assert_eq!(converter().decode(&table, "  ....   ..\t/ \n.-  "), "HI A");
    }

    #[test]
    fn decode_substitutes_placeholder_for_unknown_tokens() {
        let table = SymbolTable::new();
        assert_eq!(converter().decode(&table, ".- ........ -..."), "A?B");
        assert_eq!(converter().decode(&table, "abc"), "?");
    }

    #[test]
    fn empty_inputs_produce_empty_outputs() {
        let table = SymbolTable::new();
        assert_eq!(converter().encode(&table, ""), "");
        assert_eq!(converter().decode(&table, ""), "");
        assert_eq!(converter().decode(&table, "   \t "), "");
    }
}
