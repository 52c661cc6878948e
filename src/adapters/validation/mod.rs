//! Validation adapters.
//!
//! - **TitleRules** - trims titles, enforces 1-100 characters and unique list titles

mod title_rules;

pub use title_rules::{TitleRules, MAX_TITLE_LENGTH};
