//! Progressive hints
//!
//! Early in a game the hint reveals little; later it narrows down to words
//! that agree with all the feedback so far.

use super::session::GameSession;
use std::fmt;

/// Attempts after which hints switch to candidate words
const CANDIDATE_HINT_AFTER: usize = 3;
const COMMON_LETTER_COUNT: usize = 5;
const MAX_SUGGESTIONS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hint {
    /// No guesses yet: reveal the first letter
    FirstLetter(char),
    /// Most frequent letters across the secret word list
    CommonLetters(Vec<char>),
    /// Unguessed words consistent with every attempt
    Candidates(Vec<String>),
    KeepTrying,
}

pub(super) fn hint_for(session: &GameSession<'_>) -> Hint {
    let used = session.attempts_used();

    if used == 0 {
        return Hint::FirstLetter(char::from(session.secret().letter_at(0)));
    }

    if used < CANDIDATE_HINT_AFTER {
        let letters = session
            .source()
            .most_common_letters(COMMON_LETTER_COUNT)
            .into_iter()
            .map(|(letter, _)| char::from(letter))
            .collect();
        return Hint::CommonLetters(letters);
    }

    let suggestions: Vec<String> = session
        .candidates()
        .into_iter()
        .filter(|candidate| {
            !session
                .attempts()
                .iter()
                .any(|attempt| &attempt.guess == *candidate)
        })
        .take(MAX_SUGGESTIONS)
        .map(|w| w.text().to_string())
        .collect();

    if suggestions.is_empty() {
        Hint::KeepTrying
    } else {
        Hint::Candidates(suggestions)
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FirstLetter(letter) => {
                write!(f, "The word starts with '{}'.", letter.to_ascii_uppercase())
            }
            Self::CommonLetters(letters) => {
                let letters: Vec<String> = letters
                    .iter()
                    .map(|l| l.to_ascii_uppercase().to_string())
                    .collect();
                write!(f, "Common letters in the word list: {}", letters.join(", "))
            }
            Self::Candidates(words) => {
                let words: Vec<String> = words.iter().map(|w| w.to_uppercase()).collect();
                write!(f, "Words matching the feedback so far: {}", words.join(", "))
            }
            Self::KeepTrying => write!(
                f,
                "Keep trying! Use the colored feedback to guide your next guess."
            ),
        }
    }
}
