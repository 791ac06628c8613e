//! Game state: sessions, keyboard tracking and hints

mod hint;
pub mod keyboard;
mod session;

pub use hint::Hint;
pub use keyboard::{KEYBOARD_ROWS, LetterStates};
pub use session::{
    Attempt, DEFAULT_MAX_ATTEMPTS, GameOutcome, GameRules, GameSession, GameStatus,
    MAX_ATTEMPTS_LIMIT,
};
