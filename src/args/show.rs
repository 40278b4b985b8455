//! Page, section and single-key output.

use sacred_temple::i18n::{LocaleStore, t};
use sacred_temple::page::{Section, render_page, render_section};
use sacred_temple::preferences::PreferenceStorage;

/// What: Print the translation of one key in the active language.
///
/// Inputs:
/// - `store`: Locale store.
/// - `key`: Dotted key; printed as-is when it does not resolve.
pub fn handle_key<S: PreferenceStorage>(store: &LocaleStore<S>, key: &str) {
    println!("{}", t(store, key));
}

/// What: Print one section in the active language.
///
/// Inputs:
/// - `store`: Locale store.
/// - `section`: Section to print.
pub fn handle_section<S: PreferenceStorage>(store: &LocaleStore<S>, section: Section) {
    tracing::debug!(section = section.anchor(), locale = %store.locale(), "rendering section");
    print!("{}", render_section(store, section));
}

/// What: Print the whole page in the active language.
///
/// Inputs:
/// - `store`: Locale store.
pub fn handle_page<S: PreferenceStorage>(store: &LocaleStore<S>) {
    tracing::debug!(locale = %store.locale(), "rendering page");
    print!("{}", render_page(store));
}
