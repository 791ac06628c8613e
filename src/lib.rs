//! Wordle
//!
//! A terminal word-guessing game: guess the secret word within a limited
//! number of attempts, guided by per-letter feedback.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::Word;
//! use wordle_game::game::{GameRules, GameSession, GameStatus};
//! use wordle_game::wordlists::WordSource;
//!
//! let source = WordSource::embedded(5).unwrap();
//! let secret = Word::new("crane").unwrap();
//! let mut game = GameSession::new(&source, GameRules::default(), secret).unwrap();
//!
//! let result = game.submit_guess(&Word::new("trace").unwrap()).unwrap();
//! assert_eq!(result.to_string(), "-GYYG");
//! assert_eq!(game.status(), GameStatus::InProgress);
//! ```

// Core domain types
pub mod core;

// Error type shared by the game modules
pub mod error;

// Game sessions, keyboard state and hints
pub mod game;

// Word lists
pub mod wordlists;

// Persisted statistics
pub mod stats;

// Configuration file and command-line overrides
pub mod config;

// Logger setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
