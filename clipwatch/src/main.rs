// clipwatch/src/main.rs
//! Clipwatch entry point.
//!
//! Builds the detection engine from the merged rule configuration, installs
//! the interrupt handler, and runs the polling loop. Exit code 0 on a
//! user-requested stop; 1 on a clipboard failure, configuration failure, or
//! any other unexpected error.

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, error};
use std::sync::mpsc;
use std::time::Duration;

use clipwatch::cli::Cli;
use clipwatch::commands::monitor::{run_monitor, MonitorOptions};
use clipwatch::logger;
use clipwatch::utils::clipboard::SystemClipboard;
use clipwatch_core::config::{merge_rules, validate_rules, DetectionConfig};
use clipwatch_core::engines::regex_engine::RegexEngine;

fn main() {
    let args = Cli::parse();

    if args.debug {
        logger::init_logger(Some(log::LevelFilter::Debug));
    } else if args.quiet {
        logger::init_logger(Some(log::LevelFilter::Warn));
    } else {
        logger::init_logger(None);
    }

    if let Err(e) = run(args) {
        error!("clipwatch terminated with an error: {:#}", e);
        eprintln!("clipwatch: {:#}", e);
        std::process::exit(1);
    }
}

fn run(args: Cli) -> Result<()> {
    // 1. Load base rules, then merge any user-provided config over them.
    let default_config = DetectionConfig::load_default_rules()?;
    let user_config = match &args.config {
        Some(path) => Some(DetectionConfig::load_from_file(path)?),
        None => None,
    };
    let mut config = merge_rules(default_config, user_config);

    // 2. Apply CLI enable/disable filters and re-validate the merged set.
    config.set_active_rules(&args.enable, &args.disable);
    validate_rules(&config.rules)?;

    // 3. Compile the engine up front; rule errors must surface before the
    //    first poll, not during a tick.
    let engine = RegexEngine::new(config)?;

    // 4. Interrupt delivery: the handler only queues a message; the loop's
    //    inter-tick wait consumes it.
    let (tx, rx) = mpsc::channel();
    ctrlc::set_handler(move || {
        let _ = tx.send(());
    })
    .context("Failed to install the interrupt handler")?;

    let options = MonitorOptions {
        interval: Duration::from_millis(args.interval_ms),
    };

    let summary = run_monitor(&engine, SystemClipboard::new(), &options, rx)?;
    debug!(
        "Exiting after {} ticks, {} changes, {} alerts.",
        summary.ticks, summary.changes, summary.alerts
    );
    Ok(())
}
