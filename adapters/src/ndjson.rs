//! Best-effort parsing of newline-delimited JSON printed by `--json` commands.

use serde_json::Value;

/// Parse every line of `output` that holds a JSON document, in order.
///
/// Blank lines and lines that are not valid JSON (banners, warnings) are
/// skipped. Output spanning several lines that is one JSON document as a
/// whole, as with pretty-printed output, is taken as that document instead;
/// a top-level array contributes its elements.
pub fn parse_lines(output: &str) -> Vec<Value> {
    let trimmed = output.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    if trimmed.contains('\n') {
        match serde_json::from_str(trimmed) {
            Ok(Value::Array(items)) => return items,
            Ok(value) => return vec![value],
            Err(_) => {}
        }
    }

    trimmed
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| serde_json::from_str(line).ok())
        .collect()
}
