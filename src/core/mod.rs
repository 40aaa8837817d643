pub mod config;
pub mod converter;
pub mod engine;
pub mod history;
pub mod inverse;
pub mod table;
pub mod types;
