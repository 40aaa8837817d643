// src/lib.rs

pub mod core;
pub mod error;
pub mod persistence;

pub use crate::core::config::TranslatorConfig;
pub use crate::core::engine::Translator;
pub use crate::core::types::{Mode, TranslationRecord};
pub use crate::error::MorseError;
