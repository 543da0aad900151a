// clipwatch/src/logger.rs
//! env_logger setup for the CLI.
//!
//! `RUST_LOG` is respected when no explicit override is given; the default
//! filter is `info` so the session start/stop lines are visible out of the
//! box.

use env_logger::Env;
use log::LevelFilter;

/// Initializes the global logger.
///
/// Safe to call more than once (subsequent calls are no-ops), which keeps
/// test binaries that exercise the library path from panicking.
pub fn init_logger(level_override: Option<LevelFilter>) {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("info"));
    if let Some(level) = level_override {
        builder.filter_level(level);
    }
    builder.format_timestamp_secs();
    let _ = builder.try_init();
}
