// clipwatch/src/commands/monitor.rs
//! The polling-loop driver: poll, compare, scan, report.
//!
//! The loop is a two-state machine (running / stopped). It stops on an
//! interrupt delivered through the `interrupt` channel, or on the first
//! clipboard read failure. Stopped is terminal; there is no resume.

use anyhow::Result;
use log::{debug, error, info, warn};
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::time::Duration;

use clipwatch_core::clipboard::ClipboardSource;
use clipwatch_core::engine::DetectionEngine;
use clipwatch_core::monitor::ChangeDetector;
use clipwatch_core::report;

use crate::ui;

/// Options for the monitor loop.
#[derive(Debug, Clone)]
pub struct MonitorOptions {
    /// Fixed wait between polls.
    pub interval: Duration,
}

impl Default for MonitorOptions {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(1),
        }
    }
}

/// Counters for one monitoring session, returned on a clean stop.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MonitorSummary {
    /// Polls performed.
    pub ticks: u64,
    /// Polls whose text differed from the previously observed value.
    pub changes: u64,
    /// Changes for which at least one rule matched.
    pub alerts: u64,
}

/// Runs the monitoring session until interrupted or the clipboard fails.
///
/// One tick: poll the clipboard through `source`; if the text changed, scan
/// it and report any matched labels (WARNING log plus a user-facing alert
/// line). The inter-tick wait doubles as the interrupt point, so a queued
/// interrupt stops the loop without waiting out the interval.
///
/// Returns the session summary on a user-requested stop. A clipboard read
/// failure is fatal for the session: it is logged once and returned as an
/// error, with no further polls.
pub fn run_monitor<S: ClipboardSource>(
    engine: &dyn DetectionEngine,
    source: S,
    options: &MonitorOptions,
    interrupt: Receiver<()>,
) -> Result<MonitorSummary> {
    info!(
        "Clipboard monitor started ({} rules active, interval {:?}). Press Ctrl+C to stop.",
        engine.compiled_rules().rules.len(),
        options.interval
    );

    let mut detector = ChangeDetector::new(source);
    let mut summary = MonitorSummary::default();

    loop {
        summary.ticks += 1;

        let polled = match detector.poll() {
            Ok(polled) => polled,
            Err(e) => {
                error!("Error accessing clipboard: {}", e);
                error!("Ensure a clipboard backend is available (e.g., X11/Wayland with xclip or wl-clipboard on Linux).");
                return Err(e.into());
            }
        };

        if polled.changed {
            summary.changes += 1;
            report::log_clipboard_change_debug(module_path!(), &polled.text);

            let labels = engine.scan(&polled.text);
            if !labels.is_empty() {
                summary.alerts += 1;
                warn!("Sensitive data detected in clipboard: {:?}", labels);
                ui::print_alert(&labels);
            }
        }

        // The wait is the loop's only suspension point; an interrupt lands
        // here within one interval at worst, and immediately when queued.
        match interrupt.recv_timeout(options.interval) {
            Ok(()) | Err(RecvTimeoutError::Disconnected) => {
                info!("Clipboard monitor stopped.");
                debug!(
                    "Session summary: {} ticks, {} changes, {} alerts.",
                    summary.ticks, summary.changes, summary.alerts
                );
                return Ok(summary);
            }
            Err(RecvTimeoutError::Timeout) => {}
        }
    }
}
