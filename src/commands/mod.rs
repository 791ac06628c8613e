//! Command implementations

pub mod check;
pub mod play;
pub mod stats;
pub mod words;

pub use check::{CheckResult, check_words};
pub use play::run_play;
pub use stats::run_stats;
pub use words::{WordQuery, WordReport, export_words, word_report};
