// clipwatch-core/src/report.rs
//! Utility functions for logging detection events without leaking the
//! clipboard content they were found in.

use log::debug;
use lazy_static::lazy_static;

lazy_static! {
    /// A static boolean that is initialized once to determine if PII is allowed in debug logs.
    static ref PII_DEBUG_ALLOWED: bool = {
        std::env::var("CLIPWATCH_ALLOW_DEBUG_PII")
            .map(|s| s.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    };
}

/// Replaces sensitive content with a length-only placeholder.
pub fn redact_sensitive(s: &str) -> String {
    const MAX_LEN: usize = 8;
    if s.len() <= MAX_LEN {
        "[REDACTED]".to_string()
    } else {
        format!("[REDACTED: {} chars]", s.len())
    }
}

fn get_loggable_content(sensitive_content: &str) -> String {
    if *PII_DEBUG_ALLOWED {
        sensitive_content.to_string()
    } else {
        redact_sensitive(sensitive_content)
    }
}

/// Emits the per-change DEBUG line. The observed clipboard content is
/// redacted unless `CLIPWATCH_ALLOW_DEBUG_PII=true` is set in the
/// environment (intended for test runs only).
pub fn log_clipboard_change_debug(module_path: &str, content: &str) {
    debug!(
        "{} Clipboard content changed: '{}'",
        module_path,
        get_loggable_content(content)
    );
}
