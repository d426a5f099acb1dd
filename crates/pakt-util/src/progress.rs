//! Terminal output for long-running packset operations.
//!
//! Everything here writes to stderr so that stdout stays machine-readable
//! (the install operation prints the resolved `name version` pairs there).

use std::io::Write;

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

/// Column the status labels are right-aligned into, so consecutive lines
/// such as `Installing` / `Replacing` / `Finished` line up.
const LABEL_WIDTH: usize = 12;

/// A green status line for forward progress, e.g.
/// `  Installing durian v0.0.1`.
pub fn status(label: &str, message: &str) {
    print_status(label, message, Style::new().green().bold());
}

/// A yellow status line for something pakt is about to undo or overwrite,
/// e.g. `   Replacing ~/.pakt/packsets/default/src/durian`.
pub fn status_warn(label: &str, message: &str) {
    print_status(label, message, Style::new().yellow().bold());
}

fn print_status(label: &str, message: &str, style: Style) {
    let _ = writeln!(
        std::io::stderr(),
        "{:>width$} {message}",
        style.apply_to(label),
        width = LABEL_WIDTH,
    );
}

/// Spinner shown while the resolver works through the package index. Ticks
/// on its own; call [`ProgressBar::finish_and_clear`] once solve returns so
/// the status lines that follow start on a clean row.
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ")
            .template("{spinner:.cyan} {msg}")
            .expect("valid spinner template"),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}
