//! Per-letter knowledge for the on-screen keyboard

use crate::core::{GuessResult, Mark, Word};

/// QWERTY rows in display order
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Best mark observed for each letter `a..=z`
///
/// A letter is only ever upgraded (`Absent` -> `Present` -> `Exact`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterStates {
    states: [Option<Mark>; 26],
}

impl LetterStates {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one attempt into the known states
    pub fn record(&mut self, guess: &Word, result: &GuessResult) {
        for (&letter, &mark) in guess.letters().iter().zip(result.marks()) {
            if let Some(slot) = Self::index(letter).map(|i| &mut self.states[i]) {
                *slot = Some(slot.map_or(mark, |known| known.max(mark)));
            }
        }
    }

    /// Known state of a letter, if it has been guessed
    #[must_use]
    pub fn get(&self, letter: u8) -> Option<Mark> {
        Self::index(letter.to_ascii_lowercase()).and_then(|i| self.states[i])
    }

    /// Letters currently known with exactly this mark, alphabetically
    #[must_use]
    pub fn letters_with(&self, mark: Mark) -> Vec<char> {
        (b'a'..=b'z')
            .filter(|&letter| self.get(letter) == Some(mark))
            .map(char::from)
            .collect()
    }

    fn index(letter: u8) -> Option<usize> {
        letter
            .is_ascii_lowercase()
            .then(|| usize::from(letter - b'a'))
    }
}
