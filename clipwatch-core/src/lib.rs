// clipwatch-core/src/lib.rs
//! # Clipwatch Core Library
//!
//! `clipwatch-core` provides the fundamental, platform-independent logic for
//! detecting sensitive data in clipboard text. It defines the core data
//! structures for detection rules, provides mechanisms for compiling these
//! rules, and implements a pluggable `DetectionEngine` trait for applying
//! detection logic. It also defines the narrow `ClipboardSource` capability
//! the polling loop depends on, and the `ChangeDetector` that decides when a
//! snapshot is worth scanning.
//!
//! The library is designed to be pure and stateless apart from the single
//! `previous` value owned by a `ChangeDetector`; it performs no I/O beyond
//! reading rule files, without concerns for process lifecycle or
//! application-specific state management.
//!
//! ## Modules
//!
//! * `config`: Defines `DetectionRule`s and `DetectionConfig` for specifying sensitive patterns.
//! * `scanners`: Contains the rule compiler and its process-wide cache.
//! * `engine`: Defines the `DetectionEngine` trait, enabling a modular design.
//! * `engines`: Contains concrete implementations of the `DetectionEngine` trait.
//! * `clipboard`: Defines the `ClipboardSource` read capability and its error type.
//! * `monitor`: Defines the `ChangeDetector` that tracks the last-observed text.
//! * `report`: PII-safe logging helpers for detection events.
//! * `headless`: Convenience wrapper for one-shot, non-interactive scanning.
//!
//! ## Usage Example
//!
//! ```rust
//! use clipwatch_core::{DetectionConfig, scan_text};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     // 1. Load the default detection rules.
//!     let config = DetectionConfig::load_default_rules()?;
//!
//!     // 2. Scan a snapshot of text in a single, headless function call.
//!     let labels = scan_text(config, "reach me at test@example.com")?;
//!     assert_eq!(labels, vec!["Email address (Possible)".to_string()]);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! The library uses `anyhow::Error` for fallible configuration operations and
//! defines specific error types (`ClipwatchError`, `ClipboardError`) for
//! clearer programmatic handling. Scanning itself is infallible; the only
//! recognized runtime failure source is the clipboard read.
//!
//! ## Design Principles
//!
//! * **Pluggable Architecture:** The `DetectionEngine` and `ClipboardSource`
//!   traits allow scanning methods and clipboard backends to be swapped out
//!   seamlessly, which is what makes the polling loop testable without a
//!   real clipboard.
//! * **Deterministic Output:** Scan results follow rule order, not match
//!   position, so identical input always yields identical output.
//! * **Permissive By Design:** The built-in rules favor recall over
//!   precision; there is no checksum or RFC validation stage.
//!
//! ---
//! License: MIT OR Apache-2.0

// All modules must be declared before they can be used.
pub mod clipboard;
pub mod config;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod headless;
pub mod monitor;
pub mod report;
pub mod scanners;

// Correctly re-exporting modules and types from their canonical locations.
// This ensures the public API is clean and well-defined.

/// Re-exports the public configuration types and functions for managing detection rules.
pub use config::{
    merge_rules,
    validate_rules,
    DetectionConfig,
    DetectionRule,
    RuleConfigNotFoundError,
    MAX_PATTERN_LENGTH,
};

/// Re-exports the custom error type for clear error reporting.
pub use errors::ClipwatchError;

/// Re-exports types related to the core detection engine trait.
pub use engine::DetectionEngine;

/// Re-exports the concrete `RegexEngine` implementation.
pub use engines::regex_engine::RegexEngine;

/// Re-exports the clipboard access seam used by polling drivers.
pub use clipboard::{ClipboardError, ClipboardSource};

/// Re-exports clipboard change tracking types.
pub use monitor::{ChangeDetector, Polled};

/// Re-exports PII-safe logging helpers.
pub use report::redact_sensitive;

/// Re-exports the one-shot scanning helper for non-interactive use.
pub use headless::scan_text;

// Re-export key types from the scanners::compiler module for advanced usage.
pub use scanners::compiler::{compile_rules, CompiledRule, CompiledRules};
