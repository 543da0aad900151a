//! Configuration management for `clipwatch-core`.
//!
//! This module defines the core data structures for detection rules.
//! It handles serialization/deserialization of YAML configurations and provides
//! utilities for loading, merging, and validating these configs.
//!
//! License: MIT OR Apache-2.0

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use log::{debug, info, warn};
use std::fmt;
use regex::Regex;

/// Maximum allowed length for a regex pattern string.
pub const MAX_PATTERN_LENGTH: usize = 500;

/// Represents a single sensitive-pattern detection rule used by the Regex engine.
///
/// A rule is a named presence test: if its pattern matches anywhere in the
/// scanned text, the rule contributes its `label` to the detection result.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(default)]
pub struct DetectionRule {
    /// Unique identifier for the rule (e.g., "credit_card").
    pub name: String,
    /// User-facing label reported when the rule matches
    /// (e.g., "Credit Card Number (Possible)").
    pub label: String,
    /// Human-readable description of what the rule targets.
    pub description: Option<String>,
    /// The regex pattern string.
    pub pattern: Option<String>,
    /// The type of pattern (currently only "regex").
    pub pattern_type: String,
    /// If true, enables multiline mode for the regex engine.
    pub multiline: bool,
    /// If true, the dot character `.` in regex will match newlines.
    pub dot_matches_new_line: bool,
    /// If true, the rule is disabled unless explicitly enabled.
    pub opt_in: bool,
    /// Explicit override for enabling/disabling the rule.
    pub enabled: Option<bool>,
    /// Security severity level (e.g., "high", "medium").
    pub severity: Option<String>,
    /// Metadata tags for categorization.
    pub tags: Option<Vec<String>>,
}

impl Default for DetectionRule {
    fn default() -> Self {
        Self {
            name: String::new(),
            label: String::new(),
            description: None,
            pattern: None,
            pattern_type: "regex".to_string(),
            multiline: false,
            dot_matches_new_line: false,
            opt_in: false,
            enabled: None,
            severity: None,
            tags: None,
        }
    }
}

/// Represents the top-level configuration structure for clipwatch.
///
/// Rule order is significant: labels in a scan result are emitted in the
/// order the matching rules appear in `rules`.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq, Hash)]
pub struct DetectionConfig {
    /// An ordered list of regex-based detection rules.
    pub rules: Vec<DetectionRule>,
}

/// Error type for missing rule configurations.
#[derive(Debug)]
pub struct RuleConfigNotFoundError {
    pub config_name: String,
}

impl fmt::Display for RuleConfigNotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Rule configuration '{}' not found.", self.config_name)
    }
}

impl std::error::Error for RuleConfigNotFoundError {}

impl DetectionConfig {
    /// Loads detection rules from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading custom rules from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: DetectionConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        validate_rules(&config.rules)?;
        info!("Loaded {} rules from file {}.", config.rules.len(), path.display());

        Ok(config)
    }

    /// Loads the default detection rules from the embedded configuration.
    pub fn load_default_rules() -> Result<Self> {
        debug!("Loading default rules from embedded string...");
        let default_yaml = include_str!("../config/default_rules.yaml");
        let config: DetectionConfig = serde_yml::from_str(default_yaml)
            .context("Failed to parse default rules")?;

        debug!("Loaded {} default rules.", config.rules.len());
        Ok(config)
    }

    /// Filters active rules based on enable/disable lists provided via CLI.
    pub fn set_active_rules(&mut self, enable_rules: &[String], disable_rules: &[String]) {
        let enable_set: HashSet<&str> = enable_rules.iter().map(String::as_str).collect();
        let disable_set: HashSet<&str> = disable_rules.iter().map(String::as_str).collect();

        debug!("Initial rules count before filtering: {}", self.rules.len());

        let all_rule_names: HashSet<&str> = self.rules.iter().map(|r| r.name.as_str()).collect();

        for rule_name in enable_set.difference(&all_rule_names) {
            warn!("Rule '{}' in `enable_rules` list does not exist.", rule_name);
        }

        for rule_name in disable_set.difference(&all_rule_names) {
            warn!("Rule '{}' in `disable_rules` list does not exist.", rule_name);
        }

        self.rules.retain(|rule| {
            let rule_name_str = rule.name.as_str();
            !disable_set.contains(rule_name_str) && (!rule.opt_in || enable_set.contains(rule_name_str))
        });

        debug!("Final active rules count after filtering: {}", self.rules.len());
    }
}

/// Merges user-defined rules with defaults.
///
/// Default rule order is preserved; a user rule with a known name replaces
/// the default in place, and unknown user rules are appended in their own
/// order. Ordering must survive the merge because scan output order follows
/// rule order.
pub fn merge_rules(
    default_config: DetectionConfig,
    user_config: Option<DetectionConfig>,
) -> DetectionConfig {
    debug!("merge_rules called. Initial default rules count: {}", default_config.rules.len());

    let mut final_rules = default_config.rules;

    if let Some(user_cfg) = user_config {
        debug!("User config provided. Merging {} user rules.", user_cfg.rules.len());
        for user_rule in user_cfg.rules {
            match final_rules.iter_mut().find(|r| r.name == user_rule.name) {
                Some(existing) => *existing = user_rule,
                None => final_rules.push(user_rule),
            }
        }
    }

    debug!("Final total rules after merge: {}", final_rules.len());

    DetectionConfig { rules: final_rules }
}

/// Validates rule integrity (names, labels, regex compilation).
pub fn validate_rules(rules: &[DetectionRule]) -> Result<()> {
    let mut rule_names = HashSet::new();
    let mut errors = Vec::new();

    for rule in rules {
        if rule.name.is_empty() {
            errors.push("A rule has an empty `name` field.".to_string());
        } else if !rule_names.insert(rule.name.clone()) {
            errors.push(format!("Duplicate rule name found: '{}'.", rule.name));
        }

        if rule.label.is_empty() {
            errors.push(format!("Rule '{}' has an empty `label` field.", rule.name));
        }

        if rule.pattern_type == "regex" {
            let pattern = match &rule.pattern {
                Some(p) => p,
                None => {
                    errors.push(format!("Rule '{}' is missing the `pattern` field.", rule.name));
                    continue;
                }
            };

            if pattern.is_empty() {
                errors.push(format!("Rule '{}' has an empty `pattern` field.", rule.name));
            }

            if pattern.len() > MAX_PATTERN_LENGTH {
                errors.push(format!(
                    "Rule '{}': pattern length ({}) exceeds maximum allowed ({}).",
                    rule.name,
                    pattern.len(),
                    MAX_PATTERN_LENGTH
                ));
                continue;
            }

            if let Err(e) = Regex::new(pattern) {
                errors.push(format!("Rule '{}' has an invalid regex pattern: {}", rule.name, e));
            }
        }
    }

    if !errors.is_empty() {
        let full_error_message = format!("Rule validation failed:\n{}", errors.join("\n"));
        Err(anyhow!(full_error_message))
    } else {
        Ok(())
    }
}
