// clipwatch/src/lib.rs
//! # Clipwatch CLI Application
//!
//! This crate provides the command-line front end for the clipwatch
//! detection core: argument parsing, logging setup, the arboard-backed
//! clipboard source, and the polling-loop driver.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
pub mod utils;

// Re-export the loop driver for library consumers and tests.
pub use commands::monitor::{run_monitor, MonitorOptions, MonitorSummary};

#[cfg(any(test, feature = "test-exposed"))]
pub mod test_exposed {
    pub mod config {
        pub use clipwatch_core::config::*;
    }
    pub mod monitor {
        pub use crate::commands::monitor::*;
    }
}
