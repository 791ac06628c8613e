//! Wordle feedback calculation and representation
//!
//! Each guessed letter receives one of three marks:
//! - Exact (green): right letter, right position
//! - Present (yellow): letter is in the secret at another position
//! - Absent (gray): letter is not in the secret, or all its copies are used up

use super::Word;
use crate::error::GameError;
use std::fmt;
use std::str::FromStr;

/// Feedback for a single letter position
///
/// Ordered so that a better mark compares greater: `Absent < Present < Exact`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mark {
    /// Gray
    Absent,
    /// Yellow
    Present,
    /// Green
    Exact,
}

impl Mark {
    /// Emoji square for this mark
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Compact ASCII symbol (`G`, `Y`, `-`)
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Exact => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    /// Parse a mark from its symbol or emoji
    ///
    /// Accepts 'G'/'g'/🟩, 'Y'/'y'/🟨, and '-'/'_'/'X'/'x'/⬜.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Exact),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | 'X' | 'x' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Feedback for a whole guess, one mark per position
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GuessResult {
    marks: Vec<Mark>,
}

impl GuessResult {
    /// Wrap a sequence of marks
    #[must_use]
    pub const fn new(marks: Vec<Mark>) -> Self {
        Self { marks }
    }

    /// Calculate the feedback when `guess` is played against `secret`
    ///
    /// Implements Wordle's rules including duplicate letters: a letter is
    /// credited only as many times as it remains unmatched in the secret.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and remove them from the letter pool
    /// 2. Second pass: mark present letters while the pool still holds a copy
    ///
    /// # Errors
    /// Returns `GameError::InvalidInput` if the words differ in length.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{GuessResult, Word};
    ///
    /// let secret = Word::new("crane").unwrap();
    /// let guess = Word::new("trace").unwrap();
    /// let result = GuessResult::evaluate(&secret, &guess).unwrap();
    /// assert_eq!(result.to_string(), "-GYYG");
    /// ```
    pub fn evaluate(secret: &Word, guess: &Word) -> Result<Self, GameError> {
        if secret.len() != guess.len() {
            return Err(GameError::InvalidInput {
                expected: secret.len(),
                actual: guess.len(),
            });
        }

        let secret_letters = secret.letters();
        let guess_letters = guess.letters();
        let mut marks = vec![Mark::Absent; guess.len()];
        let mut remaining = secret.letter_counts();

        // First pass: exact position matches
        for (i, (&g, &s)) in guess_letters.iter().zip(secret_letters).enumerate() {
            if g == s {
                marks[i] = Mark::Exact;
                if let Some(count) = remaining.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: right letter, wrong position
        for (mark, &letter) in marks.iter_mut().zip(guess_letters) {
            if *mark == Mark::Exact {
                continue;
            }
            if let Some(count) = remaining.get_mut(&letter)
                && *count > 0
            {
                *mark = Mark::Present;
                *count -= 1;
            }
        }

        Ok(Self { marks })
    }

    /// The marks in position order
    #[inline]
    #[must_use]
    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    /// Number of positions
    #[inline]
    #[must_use]
    #[allow(clippy::len_without_is_empty)] // Mirrors the word length, never empty in play
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Check if every position is an exact match
    #[must_use]
    pub fn is_win(&self) -> bool {
        !self.marks.is_empty() && self.marks.iter().all(|&m| m == Mark::Exact)
    }

    /// Count the green squares
    #[must_use]
    pub fn count_exact(&self) -> usize {
        self.marks.iter().filter(|&&m| m == Mark::Exact).count()
    }

    /// Count the yellow squares
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.marks.iter().filter(|&&m| m == Mark::Present).count()
    }

    /// Convert to an emoji string such as "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.marks.iter().map(|m| m.emoji()).collect()
    }
}

impl fmt::Display for GuessResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.marks {
            write!(f, "{}", mark.symbol())?;
        }
        Ok(())
    }
}

impl FromStr for GuessResult {
    type Err = String;

    /// Parse from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err("Empty feedback string".to_string());
        }
        s.chars()
            .map(Mark::from_char)
            .collect::<Option<Vec<_>>>()
            .map(Self::new)
            .ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(secret: &str, guess: &str) -> GuessResult {
        GuessResult::evaluate(&Word::new(secret).unwrap(), &Word::new(guess).unwrap()).unwrap()
    }

    fn marks(s: &str) -> GuessResult {
        s.parse().unwrap()
    }

    #[test]
    fn same_word_is_all_exact() {
        for word in ["crane", "slate", "alloy", "zzzzz", "aaaaa", "abide"] {
            let result = eval(word, word);
            assert!(result.is_win(), "{word} should match itself");
            assert_eq!(result.count_exact(), 5);
        }
    }

    #[test]
    fn disjoint_letters_are_all_absent() {
        let result = eval("abcde", "fghij");
        assert!(result.marks().iter().all(|&m| m == Mark::Absent));
        assert_eq!(result.count_exact(), 0);
        assert_eq!(result.count_present(), 0);
    }

    #[test]
    fn crane_vs_trace() {
        // T absent, R exact, A present, C present, E exact
        let result = eval("crane", "trace");
        assert_eq!(
            result.marks(),
            &[
                Mark::Absent,
                Mark::Exact,
                Mark::Present,
                Mark::Present,
                Mark::Exact
            ]
        );
    }

    #[test]
    fn duplicate_letters_limited_by_secret() {
        // ALLOY has two L's but LLAMA's second L lands exactly on ALLOY's
        // first L, so only one more L may be credited.
        let result = eval("alloy", "llama");
        assert_eq!(result, marks("YGY--"));

        let l_credits = result
            .marks()
            .iter()
            .zip(b"llama")
            .filter(|&(&m, &ch)| ch == b'l' && m != Mark::Absent)
            .count();
        let l_in_secret = Word::new("alloy").unwrap().positions_of(b'l').len();
        assert!(l_credits <= l_in_secret);
    }

    #[test]
    fn duplicate_guess_letter_single_in_secret() {
        // Only one E in CRANE: the exact E wins, the extra E's are gray
        assert_eq!(eval("crane", "eerie"), marks("--Y-G"));
        assert_eq!(eval("abide", "eeeee"), marks("----G"));
        // No exact E: the first E gets the only yellow
        assert_eq!(eval("ebony", "geese"), marks("-Y---"));
    }

    #[test]
    fn exact_match_takes_priority_over_present() {
        // ROBOT vs FLOOR: first O yellow, second O green
        assert_eq!(eval("floor", "robot"), marks("YY-G-"));
        // SPEED vs ERASE: S yellow, both E's yellow
        assert_eq!(eval("erase", "speed"), marks("Y-YY-"));
    }

    #[test]
    fn length_mismatch_is_invalid_input() {
        let err = GuessResult::evaluate(&Word::new("crane").unwrap(), &Word::new("cranes").unwrap())
            .unwrap_err();
        assert_eq!(
            err,
            GameError::InvalidInput {
                expected: 5,
                actual: 6
            }
        );
    }

    #[test]
    fn other_lengths_are_supported() {
        assert!(eval("planet", "planet").is_win());
        assert_eq!(eval("cat", "act"), marks("YYG"));
    }

    #[test]
    fn parse_and_render() {
        let p1: GuessResult = "GY-GY".parse().unwrap();
        let p2: GuessResult = "🟩🟨⬜🟩🟨".parse().unwrap();
        let p3: GuessResult = "gyxgy".parse().unwrap();
        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
        assert_eq!(p1.to_string(), "GY-GY");
        assert_eq!(p1.to_emoji(), "🟩🟨⬜🟩🟨");

        assert!("".parse::<GuessResult>().is_err());
        assert!("GQ".parse::<GuessResult>().is_err());
    }

    #[test]
    fn mark_ordering() {
        assert!(Mark::Exact > Mark::Present);
        assert!(Mark::Present > Mark::Absent);
    }

    #[test]
    fn long_words_with_many_repeats() {
        let secret = format!("b{}", "a".repeat(256));
        let guess = format!("{}b", "a".repeat(256));
        let result = eval(&secret, &guess);

        assert_eq!(result.len(), 257);
        assert_eq!(result.marks()[0], Mark::Present);
        assert_eq!(result.marks()[256], Mark::Present);
        assert_eq!(result.count_exact(), 255);
        assert_eq!(result.count_present(), 2);
    }

    #[test]
    fn every_embedded_answer_matches_itself() {
        for &text in crate::wordlists::ANSWERS {
            let result = eval(text, text);
            assert!(result.is_win(), "{text} should match itself");
            assert_eq!(result.count_exact(), text.len());
        }
    }
}
