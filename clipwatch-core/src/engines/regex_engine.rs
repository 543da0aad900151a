// clipwatch-core/src/engines/regex_engine.rs
//! A `DetectionEngine` implementation that uses regular expressions
//! to identify sensitive data.
//! License: MIT OR Apache-2.0

use std::sync::Arc;
use anyhow::{Context, Result};

use crate::config::{DetectionConfig, DetectionRule};
use crate::engine::DetectionEngine;
use crate::scanners::compiler::{get_or_compile_rules, CompiledRules};

/// Regex-backed detection engine.
///
/// Rules are compiled once at construction (served from the process-wide
/// compiler cache when possible) and evaluated independently against the
/// full text on every `scan` call.
#[derive(Debug)]
pub struct RegexEngine {
    compiled_rules: Arc<CompiledRules>,
    config: DetectionConfig,
}

impl RegexEngine {
    pub fn new(config: DetectionConfig) -> Result<Self> {
        let compiled_rules = get_or_compile_rules(&config)
            .context("Failed to compile detection rules for RegexEngine")?;

        Ok(Self {
            compiled_rules,
            config,
        })
    }

    fn rule_config(&self, name: &str) -> Option<&DetectionRule> {
        self.config.rules.iter().find(|rule| rule.name == name)
    }
}

impl DetectionEngine for RegexEngine {
    fn scan(&self, content: &str) -> Vec<String> {
        let mut labels = Vec::new();

        for compiled_rule in &self.compiled_rules.rules {
            if let Some(rule_config) = self.rule_config(&compiled_rule.name) {
                if let Some(false) = rule_config.enabled {
                    continue;
                }
            }
            if compiled_rule.regex.is_match(content) {
                labels.push(compiled_rule.label.clone());
            }
        }

        labels
    }

    fn compiled_rules(&self) -> &CompiledRules {
        &self.compiled_rules
    }

    fn config(&self) -> &DetectionConfig {
        &self.config
    }
}
