//! Configuration loading
//!
//! Settings come from a TOML file, then command-line flags override them.
//! The file lives at `<config_dir>/wordle/config.toml` unless `--config`
//! points elsewhere:
//!
//! ```toml
//! word_length = 5
//! max_attempts = 6
//! validate_guesses = true
//! color = true
//! save_stats = true
//!
//! # Optional word lists (one word per line)
//! wordlist = "/home/me/words/answers.txt"
//! allowed = "/home/me/words/allowed.txt"
//!
//! # Optional statistics location
//! stats_file = "/home/me/.wordle-stats.json"
//! ```

use crate::game::{DEFAULT_MAX_ATTEMPTS, GameRules};
use crate::stats::StatsStore;
use crate::wordlists::loader::{load_from_file, words_from_slice};
use crate::wordlists::{ALLOWED, ANSWERS, DEFAULT_WORD_LENGTH, WordSource};
use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub word_length: usize,
    pub max_attempts: usize,
    /// Only accept guesses found in the word lists
    pub validate_guesses: bool,
    /// Colored terminal output
    pub color: bool,
    /// Persist statistics between runs
    pub save_stats: bool,
    /// Secret word list; the embedded list when unset
    pub wordlist: Option<PathBuf>,
    /// Extra accepted guesses
    pub allowed: Option<PathBuf>,
    pub stats_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            word_length: DEFAULT_WORD_LENGTH,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            validate_guesses: true,
            color: true,
            save_stats: true,
            wordlist: None,
            allowed: None,
            stats_file: None,
        }
    }
}

/// Command-line values that take precedence over the file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub word_length: Option<usize>,
    pub max_attempts: Option<usize>,
    pub no_validate: bool,
    pub no_color: bool,
    pub no_stats: bool,
    pub wordlist: Option<PathBuf>,
    pub allowed: Option<PathBuf>,
    pub stats_file: Option<PathBuf>,
}

impl Config {
    /// `<config_dir>/wordle/config.toml`
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("wordle").join("config.toml"))
    }

    /// Load configuration
    ///
    /// An explicit path must exist. Without one, the default location is
    /// used if present, otherwise built-in defaults apply.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file cannot be read or parsed.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) if path.exists() => path,
                _ => {
                    debug!("No config file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns an error for malformed TOML or unknown value types.
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply command-line overrides
    pub fn apply(&mut self, overrides: Overrides) {
        if let Some(length) = overrides.word_length {
            self.word_length = length;
        }
        if let Some(attempts) = overrides.max_attempts {
            self.max_attempts = attempts;
        }
        if overrides.no_validate {
            self.validate_guesses = false;
        }
        if overrides.no_color {
            self.color = false;
        }
        if overrides.no_stats {
            self.save_stats = false;
        }
        if overrides.wordlist.is_some() {
            self.wordlist = overrides.wordlist;
        }
        if overrides.allowed.is_some() {
            self.allowed = overrides.allowed;
        }
        if overrides.stats_file.is_some() {
            self.stats_file = overrides.stats_file;
        }
    }

    /// Reject settings that make the game unplayable
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid setting.
    pub fn validate(&self) -> Result<()> {
        self.rules().validate()?;
        Ok(())
    }

    /// Game rules derived from this configuration
    #[must_use]
    pub const fn rules(&self) -> GameRules {
        GameRules {
            word_length: self.word_length,
            max_attempts: self.max_attempts,
            validate_guesses: self.validate_guesses,
        }
    }

    /// Statistics storage, unless persistence is disabled or no location exists
    #[must_use]
    pub fn stats_store(&self) -> Option<StatsStore> {
        if !self.save_stats {
            return None;
        }
        self.stats_file
            .clone()
            .or_else(StatsStore::default_path)
            .map(StatsStore::new)
    }

    /// Build the word source described by this configuration
    ///
    /// A custom secret list replaces the embedded lists entirely, so the
    /// embedded extra guesses are only used alongside the embedded answers.
    ///
    /// # Errors
    ///
    /// Returns an error if a list file cannot be read or no secret word of
    /// the configured length is available.
    pub fn word_source(&self) -> Result<WordSource> {
        let answers = match &self.wordlist {
            Some(path) => load_from_file(path)
                .with_context(|| format!("Failed to load word list {}", path.display()))?,
            None => words_from_slice(ANSWERS),
        };

        let extras = match (&self.allowed, &self.wordlist) {
            (Some(path), _) => load_from_file(path)
                .with_context(|| format!("Failed to load allowed list {}", path.display()))?,
            (None, None) => words_from_slice(ALLOWED),
            (None, Some(_)) => Vec::new(),
        };

        WordSource::new(answers, extras, self.word_length).with_context(|| {
            format!(
                "No {}-letter words available to play with",
                self.word_length
            )
        })
    }
}
