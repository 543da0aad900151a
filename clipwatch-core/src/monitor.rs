// clipwatch-core/src/monitor.rs
//! Clipboard change tracking.
//!
//! `ChangeDetector` owns the single piece of mutable state in the system:
//! the last-observed clipboard text. It is deliberately a plain value rather
//! than process-global state so it can be driven by any `ClipboardSource`
//! in tests.
//!
//! License: MIT OR Apache-2.0

use crate::clipboard::{ClipboardError, ClipboardSource};

/// The outcome of a single poll: the text observed at that instant and
/// whether it differs from the previously observed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polled {
    pub text: String,
    pub changed: bool,
}

/// Tracks the last-observed clipboard text across polls.
///
/// The baseline is the empty string, so the first poll of a non-empty
/// clipboard always reports a change, and the stored value is updated if
/// and only if the newly fetched text differs from it.
#[derive(Debug)]
pub struct ChangeDetector<S: ClipboardSource> {
    source: S,
    previous: String,
}

impl<S: ClipboardSource> ChangeDetector<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            previous: String::new(),
        }
    }

    /// Fetches the current clipboard text and reports whether it changed.
    ///
    /// A source failure propagates untouched; there is no retry here, by
    /// contract a single read failure ends the monitoring session.
    pub fn poll(&mut self) -> Result<Polled, ClipboardError> {
        let text = self.source.read_text()?;
        let changed = text != self.previous;
        if changed {
            self.previous = text.clone();
        }
        Ok(Polled { text, changed })
    }

    /// The last-observed clipboard text.
    pub fn previous(&self) -> &str {
        &self.previous
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    struct ScriptedSource {
        reads: VecDeque<Result<String, ClipboardError>>,
    }

    impl ScriptedSource {
        fn new(reads: Vec<Result<String, ClipboardError>>) -> Self {
            Self { reads: reads.into() }
        }
    }

    impl ClipboardSource for ScriptedSource {
        fn read_text(&mut self) -> Result<String, ClipboardError> {
            self.reads
                .pop_front()
                .unwrap_or_else(|| Err(ClipboardError::Unavailable("script exhausted".into())))
        }
    }

    #[test]
    fn first_poll_of_nonempty_clipboard_is_a_change() {
        let source = ScriptedSource::new(vec![Ok("hello".to_string())]);
        let mut detector = ChangeDetector::new(source);
        let polled = detector.poll().unwrap();
        assert!(polled.changed);
        assert_eq!(polled.text, "hello");
        assert_eq!(detector.previous(), "hello");
    }

    #[test]
    fn first_poll_of_empty_clipboard_is_not_a_change() {
        // Baseline is the empty string, so an initially empty clipboard
        // matches it.
        let source = ScriptedSource::new(vec![Ok(String::new())]);
        let mut detector = ChangeDetector::new(source);
        let polled = detector.poll().unwrap();
        assert!(!polled.changed);
    }

    #[test]
    fn identical_consecutive_polls_report_no_change() {
        let source = ScriptedSource::new(vec![
            Ok("same".to_string()),
            Ok("same".to_string()),
            Ok("different".to_string()),
        ]);
        let mut detector = ChangeDetector::new(source);
        assert!(detector.poll().unwrap().changed);
        assert!(!detector.poll().unwrap().changed);
        assert!(detector.poll().unwrap().changed);
        assert_eq!(detector.previous(), "different");
    }

    #[test]
    fn source_failure_propagates() {
        let source = ScriptedSource::new(vec![Err(ClipboardError::Unavailable(
            "no display".to_string(),
        ))]);
        let mut detector = ChangeDetector::new(source);
        let err = detector.poll().unwrap_err();
        assert!(err.to_string().contains("no display"));
    }
}
