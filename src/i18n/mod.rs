//! Internationalization (i18n) module for the Sacred Temple site.
//!
//! This module provides the translation catalog, the locale preference store,
//! and the language selector view model.
//!
//! # Overview
//!
//! - **Locales**: English (`en`) and Marathi (`mr`); Marathi is the default
//!   for visitors without a saved preference
//! - **Catalog**: One nested tree per locale, loaded from `config/locales/{code}.yml`
//!   (compiled in, or read from a directory during development)
//! - **Lookup**: Dotted keys walk the tree segment by segment
//! - **Fallback**: A key that does not resolve is returned verbatim so gaps are
//!   visible on the page
//! - **Preference**: The selection is persisted as `temple-language = <code>`
//!
//! # Locale Files
//!
//! Each file holds one top-level key equal to the locale code:
//!
//! ```yaml
//! en:
//!   nav:
//!     home: "Home"
//! ```
//!
//! This becomes accessible as `nav.home`.
//!
//! # Usage
//!
//! ```rust,no_run
//! use sacred_temple::i18n::{self, Catalog, Locale, LocaleStore};
//! use sacred_temple::preferences::MemoryStorage;
//!
//! let catalog = Catalog::embedded().expect("embedded catalog");
//! let mut store = LocaleStore::open(catalog, MemoryStorage::new());
//! assert_eq!(i18n::t(&store, "nav.home"), "मुख्यपृष्ठ");
//! store.set_locale(Locale::En);
//! assert_eq!(i18n::t(&store, "nav.home"), "Home");
//! ```
//!
//! # Error Handling
//!
//! - Unsupported locale codes are rejected with `I18nError::InvalidLocale`
//! - Missing translation keys return the key itself and log debug messages
//! - Preference read/write failures are logged and never abort a change

pub mod catalog;
mod loader;
mod locale;
mod store;
pub mod switcher;
pub mod translations;

pub use catalog::{Catalog, MissingKey, Node};
pub use loader::{LocaleLoader, load_embedded, load_locale_file};
pub use locale::Locale;
pub use store::{ListenerId, LocaleStore, initial_locale};
pub use switcher::{LanguageOption, LanguageSwitcher};
pub use translations::{translate, translate_or_key};

use std::path::PathBuf;

use crate::preferences::PreferenceStorage;

/// What: Find the locales directory when running from a source checkout.
///
/// Output:
/// - `Some(PathBuf)` pointing to `CARGO_MANIFEST_DIR/config/locales` if it exists, `None` otherwise
///
/// Details:
/// - Installed binaries use the compiled-in catalog instead
#[must_use]
pub fn find_locales_dir() -> Option<PathBuf> {
    let dev_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("config")
        .join("locales");
    if dev_path.is_dir() {
        return Some(dev_path);
    }
    None
}

/// What: Get a translation for a given key from the store.
///
/// Inputs:
/// - `store`: Locale store
/// - `key`: Dot-notation key (e.g., "hero.title")
///
/// Output:
/// - Translated string, or the key itself if translation not found
pub fn t<S: PreferenceStorage>(store: &LocaleStore<S>, key: &str) -> String {
    store.translate(key)
}
