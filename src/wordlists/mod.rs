//! Word lists for the game
//!
//! Embedded lists compiled into the binary, file loading, and the
//! [`WordSource`] that sessions draw secrets from.

mod embedded;
pub mod loader;
mod source;

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};
pub use source::{DEFAULT_WORD_LENGTH, WordSource};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_count_matches_const() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
    }

    #[test]
    fn allowed_count_matches_const() {
        assert_eq!(ALLOWED.len(), ALLOWED_COUNT);
    }

    #[test]
    fn embedded_words_are_well_formed() {
        for &word in ANSWERS.iter().chain(ALLOWED) {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn answers_and_allowed_are_disjoint() {
        let answers: std::collections::HashSet<_> = ANSWERS.iter().collect();
        for word in ALLOWED {
            assert!(!answers.contains(word), "'{word}' is listed twice");
        }
    }

    #[test]
    fn reference_scenario_words_are_present() {
        for word in ["crane", "trace", "abide", "alloy", "llama"] {
            assert!(ANSWERS.contains(&word), "'{word}' missing from answers");
        }
    }
}
