//! Clipboard access seam.
//!
//! The core never talks to a platform clipboard directly; it depends on the
//! narrow `ClipboardSource` read capability defined here. The CLI crate
//! provides the production implementation, and tests substitute scripted
//! sources.

use thiserror::Error;

/// Errors reported by a clipboard source.
///
/// A source failure is fatal to a monitoring session: retrying a broken
/// clipboard backend every second is not useful, so callers are expected to
/// stop polling on the first error.
#[derive(Debug, Clone, Error)]
pub enum ClipboardError {
    /// The platform clipboard subsystem cannot be reached (e.g., a missing
    /// display-server clipboard helper on headless systems).
    #[error("clipboard subsystem unavailable: {0}")]
    Unavailable(String),
}

/// Read-only access to the system clipboard's textual content.
///
/// An empty or non-textual clipboard is represented as an empty string,
/// not an error.
pub trait ClipboardSource {
    fn read_text(&mut self) -> Result<String, ClipboardError>;
}
