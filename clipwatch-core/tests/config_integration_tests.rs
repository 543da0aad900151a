// clipwatch-core/tests/config_integration_tests.rs
use anyhow::Result;
use tempfile::NamedTempFile;
use std::io::Write;

// Import the specific types and functions needed from the main crate's config module
use clipwatch_core::config::{self, DetectionConfig, DetectionRule};

#[test]
fn test_load_default_rules() {
    let config = DetectionConfig::load_default_rules().unwrap();
    assert_eq!(config.rules.len(), 3);
    // Table order is contractual: credit card, then api key, then email.
    assert_eq!(config.rules[0].name, "credit_card");
    assert_eq!(config.rules[1].name, "api_key");
    assert_eq!(config.rules[2].name, "email");
    assert_eq!(config.rules[0].label, "Credit Card Number (Possible)");
    assert_eq!(config.rules[1].label, "API Key (Possible)");
    assert_eq!(config.rules[2].label, "Email address (Possible)");
    // None of the defaults are opt-in.
    assert!(config.rules.iter().all(|r| !r.opt_in));
}

#[test]
fn test_default_rules_validate() {
    let config = DetectionConfig::load_default_rules().unwrap();
    config::validate_rules(&config.rules).unwrap();
}

#[test]
fn test_load_from_file() -> Result<()> {
    let yaml_content = r#"
rules:
  - name: test_rule
    label: "Test Rule (Possible)"
    pattern: "test"
    description: "A test rule"
    multiline: false
    dot_matches_new_line: false
"#;
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;
    let config = DetectionConfig::load_from_file(file.path())?;
    assert_eq!(config.rules.len(), 1);
    assert_eq!(config.rules[0].name, "test_rule");
    assert_eq!(config.rules[0].label, "Test Rule (Possible)");
    assert_eq!(config.rules[0].pattern, Some("test".to_string()));
    // pattern_type defaults to "regex" when omitted.
    assert_eq!(config.rules[0].pattern_type, "regex");
    Ok(())
}

#[test]
fn test_load_from_file_rejects_invalid_regex() -> Result<()> {
    let yaml_content = r#"
rules:
  - name: broken
    label: "Broken"
    pattern: "([unclosed"
"#;
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;
    let result = DetectionConfig::load_from_file(file.path());
    assert!(result.is_err());
    let msg = format!("{:#}", result.unwrap_err());
    assert!(msg.contains("broken"), "unexpected error: {msg}");
    Ok(())
}

#[test]
fn test_load_from_file_rejects_duplicate_names() -> Result<()> {
    let yaml_content = r#"
rules:
  - name: dup
    label: "One"
    pattern: "a"
  - name: dup
    label: "Two"
    pattern: "b"
"#;
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;
    let result = DetectionConfig::load_from_file(file.path());
    assert!(result.is_err());
    let msg = format!("{:#}", result.unwrap_err());
    assert!(msg.contains("Duplicate rule name"), "unexpected error: {msg}");
    Ok(())
}

fn rule(name: &str, label: &str, pattern: &str) -> DetectionRule {
    DetectionRule {
        name: name.to_string(),
        label: label.to_string(),
        pattern: Some(pattern.to_string()),
        ..Default::default()
    }
}

#[test]
fn test_merge_rules_no_user_config() {
    let default_config = DetectionConfig {
        rules: vec![rule("email", "Email address (Possible)", "@")],
    };
    let merged = config::merge_rules(default_config.clone(), None);
    assert_eq!(merged, default_config);
}

#[test]
fn test_merge_rules_override_preserves_order() {
    let default_config = DetectionConfig {
        rules: vec![
            rule("credit_card", "Credit Card Number (Possible)", "c"),
            rule("api_key", "API Key (Possible)", "k"),
            rule("email", "Email address (Possible)", "e"),
        ],
    };
    let user_config = DetectionConfig {
        rules: vec![
            // Overrides a default in the middle of the table; must stay in place.
            rule("api_key", "API Key (Custom)", "CUSTOM_KEY=\\w+"),
            // A brand-new rule; must be appended after the defaults.
            rule("ssh_key", "SSH Key (Possible)", "BEGIN OPENSSH PRIVATE KEY"),
        ],
    };
    let merged = config::merge_rules(default_config, Some(user_config));
    let names: Vec<&str> = merged.rules.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["credit_card", "api_key", "email", "ssh_key"]);
    assert_eq!(merged.rules[1].label, "API Key (Custom)");
}

#[test]
fn test_set_active_rules_disable() {
    let mut config = DetectionConfig::load_default_rules().unwrap();
    config.set_active_rules(&[], &["email".to_string()]);
    let names: Vec<&str> = config.rules.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["credit_card", "api_key"]);
}

#[test]
fn test_set_active_rules_opt_in_requires_enable() {
    let mut opt_in_rule = rule("internal_token", "Internal Token (Possible)", "tok_\\w+");
    opt_in_rule.opt_in = true;
    let mut config = DetectionConfig {
        rules: vec![rule("email", "Email address (Possible)", "@"), opt_in_rule],
    };

    let mut without_enable = config.clone();
    without_enable.set_active_rules(&[], &[]);
    assert_eq!(without_enable.rules.len(), 1);

    config.set_active_rules(&["internal_token".to_string()], &[]);
    assert_eq!(config.rules.len(), 2);
}
