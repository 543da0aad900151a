// clipwatch-core/src/engines/mod.rs
//! Concrete implementations of the `DetectionEngine` trait.
//!
//! License: MIT OR Apache-2.0

pub mod regex_engine;

pub use regex_engine::RegexEngine;
