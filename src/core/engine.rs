use crate::core::config::TranslatorConfig;
use crate::core::converter::MorseConverter;
use crate::core::history::HistoryLog;
use crate::core::table::SymbolTable;
use crate::core::types::{Mode, Sequence, TranslationRecord};
use crate::error::Result;
use crate::persistence::export_history;
use std::path::Path;

// One translator session: the editable table, its history, and the converter
// that reads them. Construct it once and pass it to whatever serves the user.
pub struct Translator {
    table: SymbolTable,
    history: HistoryLog,
    converter: MorseConverter,
    config: TranslatorConfig,
}

impl Default for Translator {
    fn default() -> Self {
        Self::new()
    }
}

impl Translator {
    pub fn new() -> Self {
        Self::with_config(TranslatorConfig::default())
    }

    pub fn with_config(config: TranslatorConfig) -> Self {
        Self {
            table: SymbolTable::new(),
            history: HistoryLog::new(),
            converter: MorseConverter::new(config.placeholder),
            config,
        }
    }

    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    pub fn encode(&mut self, text: &str) -> String {
        let output = self.converter.encode(&self.table, text);
        tracing::debug!(input = text, output = %output, "encoded");
        self.record(Mode::Encode, text, &output);
        output
    }

    pub fn decode(&mut self, morse: &str) -> String {
        let output = self.converter.decode(&self.table, morse);
        tracing::debug!(input = morse, output = %output, "decoded");
        self.record(Mode::Decode, morse, &output);
        output
    }

    pub fn lookup(&self, symbol: char) -> Option<Sequence> {
        self.table.get(symbol).map(str::to_string)
    }

    pub fn put_mapping(&mut self, symbol: char, sequence: &str) -> Result<()> {
        self.table.put(symbol, sequence)
    }

    pub fn remove_mapping(&mut self, symbol: char) -> bool {
        self.table.remove(symbol)
    }

    pub fn list_mappings(&self) -> Vec<(char, Sequence)> {
        self.table.snapshot()
    }

    /// Throws away every edit and goes back to the built-in alphabet.
    pub fn reset_mappings(&mut self) {
        self.table = SymbolTable::new();
        tracing::info!(entries = self.table.len(), "symbol table reset to defaults");
    }

    pub fn list_history(&self) -> Vec<TranslationRecord> {
        self.history.all()
    }

    pub fn clear_history(&mut self) {
        let dropped = self.history.len();
        self.history.clear();
        tracing::info!(dropped, "history cleared");
    }

    /// Writes the current history to `path` as JSON.
    pub fn export_history(&self, path: &Path) -> std::io::Result<()> {
        export_history(&self.history.all(), path)
    }

    fn record(&mut self, mode: Mode, input: &str, output: &str) {
        if self.config.record_history {
            self.history.append(TranslationRecord::new(mode, input, output));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translations_are_recorded_in_call_order() {
        let mut translator = Translator::new();
        translator.encode("hi");
        translator.decode(".... ..");

        let history = translator.list_history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].mode(), Mode::Encode);
        assert_eq!(history[0].input(), "hi");
        assert_eq!(history[0].output(), ".... ..");
        assert_eq!(history[1].mode(), Mode::Decode);
        assert_eq!(history[1].output(), "HI");
    }

    #[test]
    fn history_can_be_disabled() {
        let mut translator = Translator::with_config(TranslatorConfig {
            record_history: false,
            ..TranslatorConfig::default()
        });
        translator.encode("abc");
        assert!(translator.list_history().is_empty());
    }

    #[test]
    fn custom_placeholder_is_used() {
        let mut translator = Translator::with_config(TranslatorConfig {
            placeholder: '*',
            ..TranslatorConfig::default()
        });
        assert_eq!(translator.encode("a#"), ".- *");
        assert_eq!(translator.decode("........"), "*");
    }

    #[test]
    fn reset_restores_defaults_and_keeps_history() {
        let mut translator = Translator::new();
        translator.put_mapping('E', "--").unwrap();
        assert!(translator.remove_mapping('A'));
        translator.encode("x");

        translator.reset_mappings();
        assert_eq!(translator.lookup('e').as_deref(), Some("."));
        assert_eq!(translator.lookup('A').as_deref(), Some(".-"));
        assert_eq!(translator.decode("--"), "M");
        assert_eq!(translator.list_history().len(), 2);
    }
}
