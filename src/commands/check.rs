//! Feedback check command
//!
//! Shows the marks a guess would receive against a chosen secret.

use crate::core::{GuessResult, Word};
use crate::error::GameError;

/// Feedback for one secret/guess pair
pub struct CheckResult {
    pub secret: Word,
    pub guess: Word,
    pub result: GuessResult,
}

/// Evaluate `guess` against `secret`
///
/// # Errors
///
/// Returns an error if either word is malformed or their lengths differ.
pub fn check_words(secret: &str, guess: &str) -> Result<CheckResult, GameError> {
    let secret = Word::new(secret)?;
    let guess = Word::new(guess)?;
    let result = GuessResult::evaluate(&secret, &guess)?;

    Ok(CheckResult {
        secret,
        guess,
        result,
    })
}
