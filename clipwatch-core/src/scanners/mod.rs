//! Rule compilation machinery for the detection engines.
//!
//! License: MIT OR Apache-2.0

pub mod compiler;

pub use compiler::{compile_rules, get_or_compile_rules, CompiledRule, CompiledRules};
