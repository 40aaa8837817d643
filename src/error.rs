use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MorseError {
    #[error("Invalid sequence {sequence:?} for '{symbol}': expected one or more of '.' and '-'")]
    InvalidFormat { symbol: char, sequence: String },

    #[error("Mapping for {0:?} is protected")]
    ProtectedSymbol(char),
}

pub type Result<T> = std::result::Result<T, MorseError>;
