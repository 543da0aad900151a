// clipwatch/src/commands/mod.rs
pub mod monitor;
