//! Prompt intent categories and their canonical tuning tables.

pub mod taxonomy;

pub use taxonomy::Category;
