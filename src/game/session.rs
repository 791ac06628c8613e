//! Game session state machine
//!
//! A session starts `InProgress` with a secret word and moves to `Won` or
//! `Lost` as guesses are submitted. Terminal states are final.

use super::hint::{Hint, hint_for};
use super::keyboard::LetterStates;
use crate::core::{GuessResult, Word};
use crate::error::GameError;
use crate::wordlists::{DEFAULT_WORD_LENGTH, WordSource};
use log::{debug, info};
use rand::Rng;

/// Attempts allowed per game unless configured otherwise
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// Upper bound on attempts per game
pub const MAX_ATTEMPTS_LIMIT: usize = 100;

/// Lifecycle of a single game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Rules shared by every game in a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRules {
    pub word_length: usize,
    pub max_attempts: usize,
    /// Reject guesses that are not in the word source's acceptable set
    pub validate_guesses: bool,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            word_length: DEFAULT_WORD_LENGTH,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            validate_guesses: true,
        }
    }
}

impl GameRules {
    /// Check that a game can be played under these rules
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidRules` for a zero word length, zero
    /// attempts, or more than [`MAX_ATTEMPTS_LIMIT`] attempts.
    pub const fn validate(&self) -> Result<(), GameError> {
        if self.word_length == 0 {
            return Err(GameError::InvalidRules("word length must be at least 1"));
        }
        if self.max_attempts == 0 {
            return Err(GameError::InvalidRules("at least one attempt is required"));
        }
        if self.max_attempts > MAX_ATTEMPTS_LIMIT {
            return Err(GameError::InvalidRules("at most 100 attempts are allowed"));
        }
        Ok(())
    }
}

/// One submitted guess and its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub guess: Word,
    pub result: GuessResult,
}

/// Summary of a finished game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOutcome {
    pub secret: Word,
    pub status: GameStatus,
    pub attempts: usize,
}

impl GameOutcome {
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.status == GameStatus::Won
    }
}

/// State of one game
pub struct GameSession<'a> {
    source: &'a WordSource,
    rules: GameRules,
    secret: Word,
    attempts: Vec<Attempt>,
    letters: LetterStates,
    status: GameStatus,
}

impl<'a> GameSession<'a> {
    /// Start a game with a known secret
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidRules` if the rules are unplayable or
    /// disagree with the word source, and `GameError::InvalidInput` if the
    /// secret has the wrong length.
    pub fn new(source: &'a WordSource, rules: GameRules, secret: Word) -> Result<Self, GameError> {
        rules.validate()?;

        if source.word_length() != rules.word_length {
            return Err(GameError::InvalidRules(
                "word source length differs from the configured word length",
            ));
        }

        if secret.len() != rules.word_length {
            return Err(GameError::InvalidInput {
                expected: rules.word_length,
                actual: secret.len(),
            });
        }

        debug!(
            "New game: {} letters, {} attempts, validation {}",
            rules.word_length,
            rules.max_attempts,
            if rules.validate_guesses { "on" } else { "off" }
        );

        Ok(Self {
            source,
            rules,
            secret,
            attempts: Vec::new(),
            letters: LetterStates::new(),
            status: GameStatus::InProgress,
        })
    }

    /// Start a game with a secret drawn at random from the word source
    ///
    /// # Errors
    ///
    /// Same as [`GameSession::new`].
    pub fn start<R: Rng + ?Sized>(
        source: &'a WordSource,
        rules: GameRules,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let secret = source.pick_secret_word(rng).clone();
        Self::new(source, rules, secret)
    }

    /// Submit a guess and get its feedback
    ///
    /// A rejected guess leaves the session untouched.
    ///
    /// # Errors
    ///
    /// - `GameError::GameOver` once the game is won or lost
    /// - `GameError::InvalidInput` if the guess has the wrong length
    /// - `GameError::InvalidWord` if validation is on and the guess is not
    ///   an acceptable word
    pub fn submit_guess(&mut self, guess: &Word) -> Result<GuessResult, GameError> {
        if self.status != GameStatus::InProgress {
            return Err(GameError::GameOver);
        }

        if guess.len() != self.rules.word_length {
            return Err(GameError::InvalidInput {
                expected: self.rules.word_length,
                actual: guess.len(),
            });
        }

        if self.rules.validate_guesses && !self.source.is_acceptable_guess(guess) {
            return Err(GameError::InvalidWord(guess.text().to_string()));
        }

        let result = GuessResult::evaluate(&self.secret, guess)?;
        self.letters.record(guess, &result);
        self.attempts.push(Attempt {
            guess: guess.clone(),
            result: result.clone(),
        });

        debug!(
            "Attempt {}/{}: {} -> {}",
            self.attempts.len(),
            self.rules.max_attempts,
            guess,
            result
        );

        if result.is_win() {
            self.status = GameStatus::Won;
            info!("Game won in {} attempts", self.attempts.len());
        } else if self.attempts.len() >= self.rules.max_attempts {
            self.status = GameStatus::Lost;
            info!("Game lost after {} attempts", self.attempts.len());
        }

        Ok(result)
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        !matches!(self.status, GameStatus::InProgress)
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub const fn rules(&self) -> &GameRules {
        &self.rules
    }

    #[must_use]
    pub const fn source(&self) -> &'a WordSource {
        self.source
    }

    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.attempts.len()
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        self.rules.max_attempts.saturating_sub(self.attempts.len())
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.rules.max_attempts
    }

    /// Best mark seen so far for each letter
    #[must_use]
    pub const fn letter_states(&self) -> &LetterStates {
        &self.letters
    }

    /// Secret words that would have produced every feedback seen so far
    #[must_use]
    pub fn candidates(&self) -> Vec<&'a Word> {
        self.source
            .answers()
            .iter()
            .filter(|&candidate| {
                self.attempts.iter().all(|attempt| {
                    GuessResult::evaluate(candidate, &attempt.guess)
                        .is_ok_and(|result| result == attempt.result)
                })
            })
            .collect()
    }

    /// A hint suited to how far the game has progressed
    #[must_use]
    pub fn hint(&self) -> Hint {
        hint_for(self)
    }

    /// Final result, once the game is over
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.is_over().then(|| GameOutcome {
            secret: self.secret.clone(),
            status: self.status,
            attempts: self.attempts.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Mark;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const WORDS: &[&str] = &[
        "crane", "trace", "abide", "alloy", "llama", "slate", "irate", "about", "above", "actor",
    ];

    fn source() -> WordSource {
        WordSource::new(words_from_slice(WORDS), words_from_slice(&["zesty"]), 5).unwrap()
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn session<'a>(source: &'a WordSource, secret: &str) -> GameSession<'a> {
        GameSession::new(source, GameRules::default(), word(secret)).unwrap()
    }

    #[test]
    fn winning_on_first_guess() {
        let source = source();
        let mut game = session(&source, "abide");

        let result = game.submit_guess(&word("abide")).unwrap();

        assert!(result.is_win());
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.attempts_used(), 1);
        assert_eq!(
            game.outcome(),
            Some(GameOutcome {
                secret: word("abide"),
                status: GameStatus::Won,
                attempts: 1
            })
        );
    }

    #[test]
    fn crane_trace_feedback_through_session() {
        let source = source();
        let mut game = session(&source, "crane");

        let result = game.submit_guess(&word("trace")).unwrap();

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
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.attempts_remaining(), 5);
    }

    #[test]
    fn lost_exactly_after_last_attempt() {
        let source = source();
        let mut game = session(&source, "crane");
        let misses = ["slate", "irate", "about", "above", "actor", "alloy"];

        for (i, guess) in misses.iter().enumerate() {
            assert_eq!(game.status(), GameStatus::InProgress, "ended early at {i}");
            game.submit_guess(&word(guess)).unwrap();
        }

        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.attempts_used(), 6);
        assert_eq!(game.attempts_remaining(), 0);
        assert!(!game.outcome().unwrap().is_win());
    }

    #[test]
    fn win_on_last_attempt_is_a_win() {
        let source = source();
        let mut game = session(&source, "crane");

        for guess in ["slate", "irate", "about", "above", "actor"] {
            game.submit_guess(&word(guess)).unwrap();
        }
        game.submit_guess(&word("crane")).unwrap();

        assert_eq!(game.status(), GameStatus::Won);
    }

    #[test]
    fn no_guesses_after_game_over() {
        let source = source();
        let mut game = session(&source, "abide");
        game.submit_guess(&word("abide")).unwrap();

        let err = game.submit_guess(&word("crane")).unwrap_err();
        assert_eq!(err, GameError::GameOver);
        assert_eq!(game.attempts_used(), 1);
        assert_eq!(game.status(), GameStatus::Won);

        let rules = GameRules {
            max_attempts: 1,
            ..GameRules::default()
        };
        let mut lost = GameSession::new(&source, rules, word("abide")).unwrap();
        lost.submit_guess(&word("crane")).unwrap();
        assert_eq!(lost.status(), GameStatus::Lost);
        assert_eq!(lost.submit_guess(&word("abide")), Err(GameError::GameOver));
        assert_eq!(lost.attempts_used(), 1);
        assert_eq!(lost.status(), GameStatus::Lost);
    }

    #[test]
    fn wrong_length_guess_is_rejected_without_mutation() {
        let source = source();
        let mut game = session(&source, "crane");

        let err = game.submit_guess(&word("cranes")).unwrap_err();
        assert_eq!(
            err,
            GameError::InvalidInput {
                expected: 5,
                actual: 6
            }
        );
        assert_eq!(game.attempts_used(), 0);
    }

    #[test]
    fn unknown_word_rejected_when_validating() {
        let source = source();
        let mut game = session(&source, "crane");

        let err = game.submit_guess(&word("qwert")).unwrap_err();
        assert_eq!(err, GameError::InvalidWord("qwert".to_string()));
        assert_eq!(game.attempts_used(), 0);

        // Extra allowed guesses are fine
        game.submit_guess(&word("zesty")).unwrap();
        assert_eq!(game.attempts_used(), 1);
    }

    #[test]
    fn unknown_word_accepted_without_validation() {
        let source = source();
        let rules = GameRules {
            validate_guesses: false,
            ..GameRules::default()
        };
        let mut game = GameSession::new(&source, rules, word("crane")).unwrap();

        let result = game.submit_guess(&word("qwert")).unwrap();
        assert_eq!(result.to_string(), "--YY-");
    }

    #[test]
    fn invalid_construction() {
        let source = source();

        assert!(matches!(
            GameSession::new(&source, GameRules::default(), word("cranes")),
            Err(GameError::InvalidInput { .. })
        ));

        let no_attempts = GameRules {
            max_attempts: 0,
            ..GameRules::default()
        };
        assert!(matches!(
            GameSession::new(&source, no_attempts, word("crane")),
            Err(GameError::InvalidRules(_))
        ));

        let endless = GameRules {
            max_attempts: usize::MAX,
            ..GameRules::default()
        };
        assert!(matches!(
            GameSession::new(&source, endless, word("crane")),
            Err(GameError::InvalidRules(_))
        ));

        let at_limit = GameRules {
            max_attempts: MAX_ATTEMPTS_LIMIT,
            ..GameRules::default()
        };
        assert!(GameSession::new(&source, at_limit, word("crane")).is_ok());

        let six_letters = GameRules {
            word_length: 6,
            ..GameRules::default()
        };
        assert!(matches!(
            GameSession::new(&source, six_letters, word("planet")),
            Err(GameError::InvalidRules(_))
        ));
    }

    #[test]
    fn start_draws_secret_from_source() {
        let source = source();
        let mut rng = StdRng::seed_from_u64(42);

        let game = GameSession::start(&source, GameRules::default(), &mut rng).unwrap();
        assert!(source.answers().contains(game.secret()));
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(game.outcome().is_none());
    }

    #[test]
    fn candidates_shrink_with_feedback() {
        let source = source();
        let mut game = session(&source, "crane");
        assert_eq!(game.candidates().len(), source.len());

        game.submit_guess(&word("trace")).unwrap();
        let remaining = game.candidates();

        assert!(remaining.iter().any(|w| w.text() == "crane"));
        assert!(remaining.len() < source.len());
        for candidate in remaining {
            let replay = GuessResult::evaluate(candidate, &word("trace")).unwrap();
            assert_eq!(replay, game.attempts()[0].result);
        }
    }

    #[test]
    fn letter_states_follow_attempts() {
        let source = source();
        let mut game = session(&source, "crane");
        game.submit_guess(&word("trace")).unwrap();

        let letters = game.letter_states();
        assert_eq!(letters.get(b't'), Some(Mark::Absent));
        assert_eq!(letters.get(b'r'), Some(Mark::Exact));
        assert_eq!(letters.get(b'a'), Some(Mark::Present));
        assert_eq!(letters.get(b'z'), None);
    }
}
