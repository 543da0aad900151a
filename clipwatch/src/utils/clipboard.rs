// clipwatch/src/utils/clipboard.rs
//! Production `ClipboardSource` backed by arboard.
//!
//! Compiled only with the default `clipboard` feature; without it the
//! source reports the clipboard subsystem as unavailable, which ends a
//! monitoring session on the first poll.

use clipwatch_core::clipboard::{ClipboardError, ClipboardSource};

/// System clipboard reader.
///
/// A fresh `arboard::Clipboard` handle is opened per read; holding one
/// handle across polls can serve stale content on some platforms.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(feature = "clipboard")]
impl ClipboardSource for SystemClipboard {
    fn read_text(&mut self) -> Result<String, ClipboardError> {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        match clipboard.get_text() {
            Ok(text) => Ok(text),
            // An empty clipboard, or one holding non-text content (images,
            // rich formats), is an empty snapshot, not a failure.
            Err(arboard::Error::ContentNotAvailable) => Ok(String::new()),
            Err(arboard::Error::ConversionFailure) => Ok(String::new()),
            Err(e) => Err(ClipboardError::Unavailable(e.to_string())),
        }
    }
}

#[cfg(not(feature = "clipboard"))]
impl ClipboardSource for SystemClipboard {
    fn read_text(&mut self) -> Result<String, ClipboardError> {
        Err(ClipboardError::Unavailable(
            "clipwatch was built without clipboard support".to_string(),
        ))
    }
}
