//! Play statistics and their JSON persistence

use anyhow::{Context, Result};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Statistics across all games played
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Statistics {
    pub games_played: u32,
    pub games_won: u32,
    pub current_streak: u32,
    pub max_streak: u32,
    /// Winning games keyed by the number of attempts used
    pub guess_distribution: BTreeMap<usize, u32>,
}

impl Statistics {
    /// Record a finished game
    pub fn record(&mut self, won: bool, attempts: usize) {
        self.games_played += 1;

        if won {
            self.games_won += 1;
            self.current_streak += 1;
            self.max_streak = self.max_streak.max(self.current_streak);
            *self.guess_distribution.entry(attempts).or_insert(0) += 1;
        } else {
            self.current_streak = 0;
        }
    }

    /// Percentage of games won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            f64::from(self.games_won) / f64::from(self.games_played) * 100.0
        }
    }

    /// Wins that took exactly `attempts` guesses
    #[must_use]
    pub fn wins_in(&self, attempts: usize) -> u32 {
        self.guess_distribution.get(&attempts).copied().unwrap_or(0)
    }
}

/// File-backed statistics storage
#[derive(Debug, Clone)]
pub struct StatsStore {
    path: PathBuf,
}

impl StatsStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<data_dir>/wordle/stats.json`, if the platform has a data directory
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|dir| dir.join("wordle").join("stats.json"))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load statistics, falling back to empty ones
    ///
    /// A missing file is normal on first run. Unreadable or corrupt files are
    /// logged and replaced by defaults so play can continue.
    #[must_use]
    pub fn load(&self) -> Statistics {
        if !self.path.exists() {
            debug!("No statistics at {}, starting fresh", self.path.display());
            return Statistics::default();
        }

        match self.try_load() {
            Ok(stats) => stats,
            Err(e) => {
                warn!("Could not load statistics: {e:#}");
                Statistics::default()
            }
        }
    }

    fn try_load(&self) -> Result<Statistics> {
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        serde_json::from_str(&content).with_context(|| format!("parsing {}", self.path.display()))
    }

    /// Write statistics as pretty JSON, creating parent directories
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub fn save(&self, stats: &Statistics) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }

        let json = serde_json::to_string_pretty(stats).context("serializing statistics")?;
        fs::write(&self.path, json).with_context(|| format!("writing {}", self.path.display()))?;
        debug!("Saved statistics to {}", self.path.display());
        Ok(())
    }
}
