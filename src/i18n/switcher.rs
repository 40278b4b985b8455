//! View model for the language selector in the site header.

use crate::error::I18nError;
use crate::i18n::{Locale, LocaleStore};
use crate::preferences::PreferenceStorage;

/// One entry of the language selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageOption {
    /// Locale this option activates.
    pub locale: Locale,
    /// Raw code submitted by the selector (e.g., `"mr"`).
    pub code: &'static str,
    /// Endonym shown to the user.
    pub label: &'static str,
    /// Whether this is the active locale.
    pub selected: bool,
}

/// Stateless adapter between a selector widget and a [`LocaleStore`].
pub struct LanguageSwitcher;

impl LanguageSwitcher {
    /// What: Build the selector options from the store.
    ///
    /// Inputs:
    /// - `store`: Locale store
    ///
    /// Output:
    /// - One option per supported locale, in selector order, with exactly one selected
    #[must_use]
    pub fn options<S: PreferenceStorage>(store: &LocaleStore<S>) -> Vec<LanguageOption> {
        let active = store.locale();
        store
            .supported_locales()
            .iter()
            .map(|&locale| LanguageOption {
                locale,
                code: locale.code(),
                label: locale.display_name(),
                selected: locale == active,
            })
            .collect()
    }

    /// What: Handle a selection coming from the widget.
    ///
    /// Inputs:
    /// - `store`: Locale store to update
    /// - `code`: Raw value of the chosen option
    ///
    /// Output:
    /// - The active locale after the selection
    ///
    /// # Errors
    /// - Returns `I18nError::InvalidLocale` for values outside the supported set
    pub fn on_select<S: PreferenceStorage>(
        store: &mut LocaleStore<S>,
        code: &str,
    ) -> Result<Locale, I18nError> {
        store.select(code.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::MemoryStorage;
    use crate::test_utils::new_store;

    #[test]
    /// What: Ensure options follow selector order and mark the active locale.
    fn options_mark_active_locale() {
        let mut store = new_store(MemoryStorage::new());
        let options = LanguageSwitcher::options(&store);
        assert_eq!(
            options
                .iter()
                .map(|o| (o.code, o.label, o.selected))
                .collect::<Vec<_>>(),
            vec![("en", "English", false), ("mr", "मराठी", true)]
        );

        LanguageSwitcher::on_select(&mut store, "en").expect("en is supported");
        let options = LanguageSwitcher::options(&store);
        assert_eq!(options.iter().filter(|o| o.selected).count(), 1);
        assert!(options[0].selected);
    }

    #[test]
    /// What: Ensure unknown selections are rejected without changing the store.
    fn on_select_rejects_unknown() {
        let mut store = new_store(MemoryStorage::new());
        assert!(LanguageSwitcher::on_select(&mut store, "hi").is_err());
        assert_eq!(store.locale(), Locale::Mr);
        assert_eq!(
            LanguageSwitcher::on_select(&mut store, " en ").expect("trimmed code accepted"),
            Locale::En
        );
    }
}
