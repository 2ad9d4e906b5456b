//! Terminal output helpers for the CLI.
//!
//! Everything is emitted through the `log` macros so the same lines reach the
//! console and the optional log file. Colors are skipped when `NO_COLOR` is
//! set.

use console::style;
use log::{error, info};
use owo_colors::OwoColorize;

/// Width of the label column in status lines.
const LABEL_WIDTH: usize = 15;

/// Check if color should be used (respects NO_COLOR environment variable)
fn should_use_color() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Print a section header (main sections in cyan)
pub fn print_section(title: &str) {
    info!("");
    if should_use_color() {
        info!("===== {} =====", title.to_uppercase().cyan().bold());
    } else {
        info!("===== {} =====", title.to_uppercase());
    }
    info!("");
}

/// Print a processing step
pub fn print_processing(message: &str) {
    if should_use_color() {
        info!("  » {}", style(message).bold());
    } else {
        info!("  » {}", message);
    }
}

fn status_line(label: &str, value: &str) -> String {
    let padding = LABEL_WIDTH.saturating_sub(label.len()).max(1);
    format!("  {}:{}{}", label, " ".repeat(padding), value)
}

/// Print a status line: label column, then the value
pub fn print_status(label: &str, value: &str, highlight: bool) {
    if should_use_color() && highlight {
        info!("{}", status_line(label, &style(value).bold().to_string()));
    } else {
        info!("{}", status_line(label, value));
    }
}

/// Print an item under the current section
pub fn print_sub_item(message: &str) {
    info!("    {}", message);
}

/// Print a success message in green
pub fn print_success(message: &str) {
    info!("");
    if should_use_color() {
        info!("  ✓ {}", message.green());
    } else {
        info!("  ✓ {}", message);
    }
}

/// Print an error message in red
pub fn print_error(message: &str) {
    if should_use_color() {
        error!("✗ {}", message.red().bold());
    } else {
        error!("✗ {}", message);
    }
}
