//! Logger setup
//!
//! Diagnostics go to stderr so they never interleave with the game board on
//! stdout. `RUST_LOG` takes precedence over the verbosity flag.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Level for a given number of `-v` flags
#[must_use]
pub const fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

/// Install the global logger
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init(verbosity: u8) {
    let default = level_for(verbosity).as_str().to_ascii_lowercase();

    let _ = Builder::from_env(Env::default().default_filter_or(default))
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}
