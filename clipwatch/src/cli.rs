// clipwatch/src/cli.rs
//! This file defines the command-line interface (CLI) for the clipwatch
//! application.
//! License: MIT OR Apache-2.0

use clap::Parser;
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "clipwatch",
    author = "Relay",
    version = env!("CARGO_PKG_VERSION"),
    about = "Monitor the system clipboard for sensitive data",
    long_about = "Clipwatch is a command-line utility that polls the system clipboard at a fixed interval and alerts when newly copied text looks like sensitive data (credit card numbers, API keys, email addresses). It reports; it never modifies the clipboard or transmits its contents anywhere.",
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG for 'clipwatch' crate to DEBUG)
    #[arg(long, short = 'd', help = "Enable debug logging.")]
    pub debug: bool,

    /// Path to a custom detection configuration file (YAML).
    #[arg(long = "config", value_name = "FILE", help = "Path to a custom detection configuration file (YAML), merged over the built-in rules.")]
    pub config: Option<PathBuf>,

    /// Explicitly enable these rule names (comma-separated).
    #[arg(long, short = 'e', value_delimiter = ',', help = "Explicitly enable these rule names (comma-separated), including opt-in rules.")]
    pub enable: Vec<String>,

    /// Explicitly disable these rule names (comma-separated).
    #[arg(long, short = 'x', value_delimiter = ',', help = "Explicitly disable these rule names (comma-separated).")]
    pub disable: Vec<String>,

    /// Polling interval in milliseconds.
    #[arg(long = "interval-ms", value_name = "MS", default_value_t = 1000, help = "Polling interval in milliseconds (default: 1000).")]
    pub interval_ms: u64,
}
