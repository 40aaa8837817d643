// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::SystemTime;

/// A dot/dash string encoding one character, e.g. "-.-.".
pub type Sequence = String;

/// Stands in for a space between words, both in the table and on the wire.
pub const WORD_SEPARATOR: &str = "/";

/// Joins per-character sequences in encoded output.
pub const SYMBOL_JOINER: &str = " ";

/// The key whose mapping to [`WORD_SEPARATOR`] can never be removed or changed.
pub const SPACE: char = ' ';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Encode,
    Decode,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Encode => f.pad("encode"),
            Mode::Decode => f.pad("decode"),
        }
    }
}

/// One finished translation. Fields are read-only once the record exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRecord {
    timestamp: SystemTime,
    mode: Mode,
    input: String,
    output: String,
}

impl TranslationRecord {
    pub fn new(mode: Mode, input: &str, output: &str) -> Self {
        Self {
            timestamp: SystemTime::now(),
            mode,
            input: input.to_string(),
            output: output.to_string(),
        }
    }

    pub fn timestamp(&self) -> SystemTime {
        self.timestamp
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn output(&self) -> &str {
        &self.output
    }
}

/// Upper-cases a single key. Characters whose uppercase form is more than one
/// character (e.g. 'ß') are kept as they are.
pub fn normalize_key(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// True when `sequence` is one or more of '.' and '-'.
pub fn is_valid_sequence(sequence: &str) -> bool {
    !sequence.is_empty() && sequence.chars().all(|c| c == '.' || c == '-')
}
