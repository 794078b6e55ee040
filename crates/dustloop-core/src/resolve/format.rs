// ── Reply formatting ──

use crate::model::Field;

/// Render `"<Label>: <Value>"`, or `"<Label>: N/A"` for a missing value.
///
/// Only the first character is uppercased. Values that start with a
/// non-letter (`-7`, `+2`) pass through untouched.
pub fn format_field(field: Field, value: Option<&str>) -> String {
    match value {
        Some(value) => format!("{}: {}", field.label(), capitalize_first(value)),
        None => format!("{}: N/A", field.label()),
    }
}

fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
