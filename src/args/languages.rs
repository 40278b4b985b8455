//! Language listing (`--list-languages`).

use sacred_temple::i18n::{LanguageOption, LanguageSwitcher, LocaleStore};
use sacred_temple::preferences::PreferenceStorage;

/// What: Format selector options, one per line.
///
/// Inputs:
/// - `options`: Options from `LanguageSwitcher::options`.
///
/// Output:
/// - Lines like `* mr  मराठी`, with `*` marking the active language.
pub fn format_options(options: &[LanguageOption]) -> String {
    options
        .iter()
        .map(|o| {
            let marker = if o.selected { '*' } else { ' ' };
            format!("{marker} {:<4}{}\n", o.code, o.label)
        })
        .collect()
}

/// What: Print the available languages with the active one marked.
///
/// Inputs:
/// - `store`: Locale store.
pub fn handle_list_languages<S: PreferenceStorage>(store: &LocaleStore<S>) {
    print!("{}", format_options(&LanguageSwitcher::options(store)));
}
