//! Core domain types for Wordle
//!
//! Words and the feedback engine. Everything here is pure and free of I/O.

mod feedback;
mod word;

pub use feedback::{GuessResult, Mark};
pub use word::{Word, WordError};
