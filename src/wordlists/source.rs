//! Word source: secret words and acceptable guesses
//!
//! Built once at startup and immutable afterwards. Game sessions borrow it.

use super::loader::words_from_slice;
use super::{ALLOWED, ANSWERS};
use crate::core::Word;
use crate::error::GameError;
use log::{debug, info, warn};
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::{FxHashMap, FxHashSet};

/// The word length of the embedded lists
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Valid secret words plus the set of acceptable guesses
///
/// Guarantees a non-empty secret list in which every word has the configured
/// length. Acceptable guesses are the secrets plus any extra allowed words.
#[derive(Debug, Clone)]
pub struct WordSource {
    word_length: usize,
    answers: Vec<Word>,
    accepted: FxHashSet<Word>,
}

impl WordSource {
    /// Build a word source
    ///
    /// Words of the wrong length are skipped and duplicates dropped, keeping
    /// the first occurrence.
    ///
    /// # Errors
    ///
    /// Returns `GameError::WordSourceEmpty` if no secret word survives filtering.
    pub fn new(
        answers: Vec<Word>,
        extra_guesses: Vec<Word>,
        word_length: usize,
    ) -> Result<Self, GameError> {
        let mut accepted = FxHashSet::default();
        let mut kept = Vec::with_capacity(answers.len());
        let mut skipped = 0usize;

        for word in answers {
            if word.len() != word_length {
                skipped += 1;
                continue;
            }
            if accepted.insert(word.clone()) {
                kept.push(word);
            }
        }

        for word in extra_guesses {
            if word.len() == word_length {
                accepted.insert(word);
            } else {
                skipped += 1;
            }
        }

        if skipped > 0 {
            warn!("Skipped {skipped} words that are not {word_length} letters long");
        }

        if kept.is_empty() {
            return Err(GameError::WordSourceEmpty);
        }

        info!(
            "Loaded {} secret words and {} acceptable guesses",
            kept.len(),
            accepted.len()
        );

        Ok(Self {
            word_length,
            answers: kept,
            accepted,
        })
    }

    /// Word source backed by the lists compiled into the binary
    ///
    /// # Errors
    ///
    /// Returns `GameError::WordSourceEmpty` if `word_length` matches none of
    /// the embedded words.
    pub fn embedded(word_length: usize) -> Result<Self, GameError> {
        Self::new(
            words_from_slice(ANSWERS),
            words_from_slice(ALLOWED),
            word_length,
        )
    }

    /// Draw a uniformly random secret word
    pub fn pick_secret_word<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        let word = &self.answers[rng.random_range(0..self.answers.len())];
        debug!("Picked a secret word from {} candidates", self.answers.len());
        word
    }

    /// Whether a guess is in the acceptable set
    #[must_use]
    pub fn is_acceptable_guess(&self, word: &Word) -> bool {
        self.accepted.contains(word)
    }

    /// Configured word length
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// All secret words
    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    /// Number of secret words
    #[must_use]
    #[allow(clippy::len_without_is_empty)] // Never empty by construction
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    /// Number of acceptable guesses (secrets included)
    #[must_use]
    pub fn accepted_count(&self) -> usize {
        self.accepted.len()
    }

    /// Secret words starting with `prefix`
    #[must_use]
    pub fn words_starting_with(&self, prefix: &str) -> Vec<&Word> {
        let prefix = prefix.to_lowercase();
        self.answers
            .iter()
            .filter(|w| w.text().starts_with(&prefix))
            .collect()
    }

    /// Secret words containing `letter`
    #[must_use]
    pub fn words_containing(&self, letter: char) -> Vec<&Word> {
        let letter = letter.to_ascii_lowercase();
        if !letter.is_ascii_lowercase() {
            return Vec::new();
        }
        self.answers
            .iter()
            .filter(|w| w.has_letter(letter as u8))
            .collect()
    }

    /// Secret words matching a pattern such as `a??le`
    ///
    /// `?` (or `_`, `.`) matches any letter. Patterns of the wrong length
    /// match nothing.
    #[must_use]
    pub fn words_matching(&self, pattern: &str) -> Vec<&Word> {
        let pattern = pattern.trim().to_lowercase();
        if pattern.len() != self.word_length {
            return Vec::new();
        }
        self.answers
            .iter()
            .filter(|w| {
                pattern
                    .bytes()
                    .zip(w.letters())
                    .all(|(p, &ch)| matches!(p, b'?' | b'_' | b'.') || p == ch)
            })
            .collect()
    }

    /// How often each letter occurs across all secret words
    #[must_use]
    pub fn letter_frequency(&self) -> FxHashMap<u8, usize> {
        let mut frequency = FxHashMap::default();
        for word in &self.answers {
            for &ch in word.letters() {
                *frequency.entry(ch).or_insert(0) += 1;
            }
        }
        frequency
    }

    /// The `count` most frequent letters, most frequent first
    ///
    /// Ties are broken alphabetically.
    #[must_use]
    pub fn most_common_letters(&self, count: usize) -> Vec<(u8, usize)> {
        let mut letters: Vec<(u8, usize)> = self.letter_frequency().into_iter().collect();
        letters.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        letters.truncate(count);
        letters
    }

    /// Up to `count` distinct random secret words
    pub fn sample<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<&Word> {
        self.answers.choose_multiple(rng, count).collect()
    }
}
