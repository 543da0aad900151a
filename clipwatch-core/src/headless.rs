// clipwatch-core/src/headless.rs

//! `headless.rs`
//! Convenience wrapper for one-shot, non-interactive scanning of strings.
//! Useful for embedding the detection engine without running a polling loop.

use anyhow::Result;
use crate::config::DetectionConfig;
use crate::engine::DetectionEngine;
use crate::engines::regex_engine::RegexEngine;

/// Scans `content` against `config` in a single call and returns the labels
/// of all matching rules, in rule order.
///
/// This is the primary entry point for library consumers that do not need a
/// long-lived engine. The engine construction cost is amortized by the
/// process-wide compiled-rule cache, so repeated calls with the same config
/// stay cheap.
pub fn scan_text(config: DetectionConfig, content: &str) -> Result<Vec<String>> {
    let engine = RegexEngine::new(config)?;
    Ok(engine.scan(content))
}
