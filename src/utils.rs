//! Small helpers shared by the binary and printers.

use owo_colors::OwoColorize;

/// Whether colored output should be used for the given output mode.
pub fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

fn prefix(tag: &str, paint: fn(&str) -> String) -> String {
    if std::env::var_os("NO_COLOR").is_some() {
        tag.to_string()
    } else {
        paint(tag)
    }
}

pub fn error_prefix() -> String {
    prefix("error:", |t| t.red().bold().to_string())
}

pub fn note_prefix() -> String {
    prefix("note:", |t| t.cyan().bold().to_string())
}
