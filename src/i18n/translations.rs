//! Translation lookup utilities over a single locale tree.

use crate::i18n::catalog::Node;

/// What: Look up a translation in a locale tree.
///
/// Inputs:
/// - `tree`: Root node of one locale
/// - `key`: Dot-notation key (e.g., "hero.title")
///
/// Output:
/// - `Option<String>` containing the translation, or None if not found
///
/// Details:
/// - An empty leaf counts as not found, so a blank translation is as visible as a missing one
#[must_use]
pub fn translate(tree: &Node, key: &str) -> Option<String> {
    tree.lookup(key)
        .filter(|text| !text.is_empty())
        .map(ToString::to_string)
}

/// What: Look up a translation, returning the key itself when it is missing.
///
/// Inputs:
/// - `tree`: Root node of one locale
/// - `key`: Dot-notation key
/// - `locale_code`: Code of `tree`, only used for the miss log line
///
/// Output:
/// - Translated string, or `key` verbatim
///
/// Details:
/// - There is no cross-locale fallback: a raw key on screen marks the gap
/// - Misses are logged at debug level to stay discoverable without flooding the log
pub fn translate_or_key(tree: &Node, key: &str, locale_code: &str) -> String {
    if let Some(translation) = translate(tree, key) {
        return translation;
    }

    tracing::debug!(
        "Missing translation key: '{}' for locale '{}'. Returning key as-is.",
        key,
        locale_code
    );
    key.to_string()
}
