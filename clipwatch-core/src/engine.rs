// clipwatch-core/src/engine.rs
//! Defines the core DetectionEngine trait.
//!
//! The `DetectionEngine` trait provides a pluggable interface for different
//! scanning methods. This module defines the contract that all such engines
//! must adhere to, ensuring a consistent and interchangeable core API for
//! `clipwatch`.
//!
//! License: MIT OR Apache-2.0

use crate::config::DetectionConfig;
use crate::scanners::compiler::CompiledRules;

/// A trait that defines the core functionality of a detection engine.
///
/// This trait decouples the high-level polling loop from the specific
/// implementation of a scanning method, allowing for different engines
/// to be used interchangeably.
pub trait DetectionEngine: Send + Sync {
    /// Scans the provided content and returns the labels of all matching rules.
    ///
    /// Each rule is a boolean presence test: a rule contributes its label at
    /// most once no matter how many times its pattern occurs in `content`.
    /// Labels are returned in rule order, so output ordering is deterministic
    /// and independent of where matches occur within the text. An empty
    /// vector means nothing matched.
    ///
    /// This is a pure function of `content` and the engine's rule table; it
    /// performs no I/O and cannot fail.
    fn scan(&self, content: &str) -> Vec<String>;

    /// Returns a reference to the `CompiledRules` used by the engine.
    ///
    /// This is used by external components, such as status output, to access
    /// and display information about the rules without needing to recompile
    /// them.
    fn compiled_rules(&self) -> &CompiledRules;

    /// Returns a reference to the engine's configuration.
    fn config(&self) -> &DetectionConfig;
}
