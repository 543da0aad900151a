// clipwatch/src/ui/mod.rs
//! User-facing output for the CLI.
//!
//! Alerts go to stdout (the one plain-text channel a user is expected to
//! watch); everything else goes through the `log` facade to stderr.

use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use std::io;

/// Prints the user-facing alert line for a set of matched rule labels.
///
/// Colored when stdout is a terminal, plain otherwise so piped output stays
/// machine-readable.
pub fn print_alert(labels: &[String]) {
    let message = format!(
        "Alert! Potential sensitive data found: {}",
        labels.join(", ")
    );
    if io::stdout().is_terminal() {
        println!("{}", message.red().bold());
    } else {
        println!("{}", message);
    }
}
