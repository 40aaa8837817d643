/// Knobs for a [`crate::Translator`] session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatorConfig {
    /// Append a record to the history for every encode/decode.
    pub record_history: bool,
    /// Emitted in place of anything the table cannot map.
    pub placeholder: char,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            record_history: true,
            placeholder: '?',
        }
    }
}
