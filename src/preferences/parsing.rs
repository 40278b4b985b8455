//! Parsing helpers for `key = value` preference lines.

/// What: Normalize a preference key for comparison.
///
/// Inputs:
/// - `raw`: Key as written in the file (e.g., `Temple-Language`)
///
/// Output:
/// - Lowercase key with `.`, `-`, and spaces mapped to `_` (e.g., `temple_language`)
pub(crate) fn normalize_key(raw: &str) -> String {
    raw.trim().to_lowercase().replace(['.', '-', ' '], "_")
}

/// What: Strip a trailing `#` or `//` comment from a value.
///
/// Inputs:
/// - `s`: Raw value text after `=`
///
/// Output:
/// - Value without the comment, trimmed
pub(crate) fn strip_inline_comment(mut s: &str) -> &str {
    if let Some(i) = s.find("//") {
        s = &s[..i];
    }
    if let Some(i) = s.find('#') {
        s = &s[..i];
    }
    s.trim()
}

/// What: Split a preference line into normalized key and value.
///
/// Inputs:
/// - `line`: One line of the preferences file
///
/// Output:
/// - `Some((key, value))` for `key = value` lines; `None` for blanks, comments,
///   and lines without `=`
pub(crate) fn parse_line(line: &str) -> Option<(String, &str)> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
        return None;
    }
    let (raw_key, raw_val) = trimmed.split_once('=')?;
    Some((normalize_key(raw_key), strip_inline_comment(raw_val)))
}
