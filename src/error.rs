//! Game error type
//!
//! Every failure a game operation can report. All of them are recoverable at
//! the interaction boundary: guess errors re-prompt, startup errors abort.

use crate::core::WordError;
use thiserror::Error;

/// Errors raised by the feedback engine, game sessions and word sources
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Guess and secret (or configured length) disagree
    #[error("word must be exactly {expected} letters, got {actual}")]
    InvalidInput { expected: usize, actual: usize },

    /// Guess is malformed or not in the acceptable word list
    #[error("'{0}' is not in the word list")]
    InvalidWord(String),

    /// Guess submitted after the game was won or lost
    #[error("the game is already over")]
    GameOver,

    /// No usable secret words were loaded
    #[error("no valid words available for the game")]
    WordSourceEmpty,

    /// Rules that make the game unplayable
    #[error("invalid game rules: {0}")]
    InvalidRules(&'static str),
}

impl GameError {
    /// Whether the player can fix this by typing a different guess
    #[must_use]
    pub const fn is_guess_error(&self) -> bool {
        matches!(self, Self::InvalidInput { .. } | Self::InvalidWord(_))
    }
}

impl From<WordError> for GameError {
    fn from(err: WordError) -> Self {
        match err {
            WordError::InvalidLength { expected, actual } => Self::InvalidInput { expected, actual },
            WordError::Empty => Self::InvalidInput {
                expected: 1,
                actual: 0,
            },
            WordError::NonAscii(text) | WordError::InvalidCharacters(text) => Self::InvalidWord(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guess_errors_are_recoverable() {
        assert!(
            GameError::InvalidInput {
                expected: 5,
                actual: 4
            }
            .is_guess_error()
        );
        assert!(GameError::InvalidWord("zzzzz".to_string()).is_guess_error());
        assert!(!GameError::GameOver.is_guess_error());
        assert!(!GameError::WordSourceEmpty.is_guess_error());
    }

    #[test]
    fn word_errors_convert() {
        let err: GameError = WordError::InvalidLength {
            expected: 5,
            actual: 6,
        }
        .into();
        assert_eq!(
            err,
            GameError::InvalidInput {
                expected: 5,
                actual: 6
            }
        );

        let err: GameError = WordError::InvalidCharacters("cr4ne".to_string()).into();
        assert_eq!(err, GameError::InvalidWord("cr4ne".to_string()));
    }

    #[test]
    fn messages_are_readable() {
        assert_eq!(
            GameError::InvalidInput {
                expected: 5,
                actual: 3
            }
            .to_string(),
            "word must be exactly 5 letters, got 3"
        );
        assert_eq!(
            GameError::InvalidWord("qwert".to_string()).to_string(),
            "'qwert' is not in the word list"
        );
    }
}
