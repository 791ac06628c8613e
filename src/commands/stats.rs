//! Statistics command

use crate::stats::{Statistics, StatsStore};
use anyhow::{Result, bail};
use log::info;

/// Load persisted statistics, optionally clearing them first
///
/// # Errors
///
/// Returns an error if persistence is disabled or a reset cannot be written.
pub fn run_stats(store: Option<&StatsStore>, reset: bool) -> Result<Statistics> {
    let Some(store) = store else {
        bail!("Statistics are disabled (--no-stats or save_stats = false)");
    };

    if reset {
        let stats = Statistics::default();
        store.save(&stats)?;
        info!("Reset statistics at {}", store.path().display());
        return Ok(stats);
    }

    Ok(store.load())
}
