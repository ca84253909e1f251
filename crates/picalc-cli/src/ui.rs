//! UI helpers for CLI display.

use console::style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// Format a section header.
#[must_use]
pub fn header(text: &str) -> String {
    if is_color_disabled() {
        format!("=== {text} ===")
    } else {
        style(format!("=== {text} ===")).bold().cyan().to_string()
    }
}

/// Format an error label followed by `text`.
#[must_use]
pub fn error_line(text: &str) -> String {
    if is_color_disabled() {
        format!("[ERROR] {text}")
    } else {
        format!("{} {text}", style("[ERROR]").red().bold())
    }
}
