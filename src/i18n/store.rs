//! Locale preference store: the active locale, its persistence, and change notification.

use std::fmt;

use crate::error::I18nError;
use crate::i18n::Locale;
use crate::i18n::catalog::Catalog;
use crate::i18n::translations::translate_or_key;
use crate::preferences::{LANGUAGE_KEY, PreferenceStorage};

/// Handle returned by [`LocaleStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Callback invoked with the new locale after every change.
type Listener = Box<dyn FnMut(Locale)>;

/// Owner of the active locale.
///
/// Construct one per session with [`LocaleStore::open`] and hand it to every
/// consumer that renders text. All mutation goes through `&mut self`, so a
/// change (state, persistence, notification) is complete before any reader
/// observes the store again.
pub struct LocaleStore<S: PreferenceStorage> {
    /// Translation trees.
    catalog: Catalog,
    /// Where the selection is persisted.
    storage: S,
    /// Currently selected locale.
    active: Locale,
    /// Registered change callbacks, in subscription order.
    listeners: Vec<(ListenerId, Listener)>,
    /// Next id handed out by `subscribe`.
    next_listener: u64,
}

impl<S: PreferenceStorage> fmt::Debug for LocaleStore<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocaleStore")
            .field("active", &self.active)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

/// What: Read the persisted locale and report whether storage already holds it.
///
/// Inputs:
/// - `storage`: Preference storage to read
///
/// Output:
/// - `(locale, in_sync)`: the locale to adopt, and `true` only when storage holds exactly its code
///
/// Details:
/// - Missing, unsupported, and unreadable values all resolve to `Locale::DEFAULT` and are out of sync
fn read_persisted<S: PreferenceStorage>(storage: &S) -> (Locale, bool) {
    match storage.read(LANGUAGE_KEY) {
        Ok(Some(raw)) => match Locale::from_code(raw.trim()) {
            Some(locale) => (locale, raw == locale.code()),
            None => {
                tracing::warn!(
                    value = %raw,
                    default = %Locale::DEFAULT,
                    "ignoring unsupported persisted locale"
                );
                (Locale::DEFAULT, false)
            }
        },
        Ok(None) => {
            tracing::debug!(default = %Locale::DEFAULT, "no persisted locale, using default");
            (Locale::DEFAULT, false)
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to read persisted locale, using default");
            (Locale::DEFAULT, false)
        }
    }
}

/// What: Decide the starting locale from persisted storage.
///
/// Inputs:
/// - `storage`: Preference storage to read
///
/// Output:
/// - Persisted locale when present and supported, otherwise `Locale::DEFAULT`
///
/// Details:
/// - Read failures are treated like an empty store and logged at warn level
pub fn initial_locale<S: PreferenceStorage>(storage: &S) -> Locale {
    read_persisted(storage).0
}

impl<S: PreferenceStorage> LocaleStore<S> {
    /// What: Initialize the store from persisted state.
    ///
    /// Inputs:
    /// - `catalog`: Translation trees for every supported locale
    /// - `storage`: Preference storage holding the previous selection, if any
    ///
    /// Output:
    /// - Active store whose locale is the persisted one, or `Locale::DEFAULT`
    ///
    /// Details:
    /// - When storage does not already hold the adopted code (missing, unsupported, or
    ///   unreadable value), the code is written back; a failed write is only logged
    pub fn open(catalog: Catalog, mut storage: S) -> Self {
        let (active, in_sync) = read_persisted(&storage);
        if !in_sync {
            match storage.write(LANGUAGE_KEY, active.code()) {
                Ok(()) => tracing::debug!(locale = %active, "persisted resolved locale"),
                Err(e) => {
                    tracing::warn!(
                        locale = %active,
                        error = %e,
                        "failed to persist locale preference"
                    );
                }
            }
        }
        tracing::info!(locale = %active, "locale store initialized");
        Self {
            catalog,
            storage,
            active,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    /// Active locale.
    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.active
    }

    /// What: Make `locale` active, persist it, and notify listeners.
    ///
    /// Inputs:
    /// - `locale`: Locale to activate
    ///
    /// Details:
    /// - Selecting the already active locale is a no-op (no write, no notification)
    /// - Persistence is best-effort: a failed write is logged and the change still applies
    /// - Listeners run synchronously, in subscription order, before this returns
    pub fn set_locale(&mut self, locale: Locale) {
        if locale == self.active {
            tracing::debug!(locale = %locale, "locale unchanged");
            return;
        }
        let previous = self.active;
        self.active = locale;
        if let Err(e) = self.storage.write(LANGUAGE_KEY, locale.code()) {
            tracing::warn!(locale = %locale, error = %e, "failed to persist locale preference");
        }
        tracing::info!(from = %previous, to = %locale, "locale changed");
        for (_, listener) in &mut self.listeners {
            listener(locale);
        }
    }

    /// What: Activate a locale given by its raw code (selector callback path).
    ///
    /// Inputs:
    /// - `code`: Raw locale code such as `"en"`
    ///
    /// Output:
    /// - The activated locale
    ///
    /// # Errors
    /// - Returns `I18nError::InvalidLocale` for unsupported codes; the active locale is unchanged
    pub fn select(&mut self, code: &str) -> Result<Locale, I18nError> {
        let locale = code.parse::<Locale>().inspect_err(|_| {
            tracing::warn!(code, active = %self.active, "rejected unsupported locale");
        })?;
        self.set_locale(locale);
        Ok(locale)
    }

    /// What: Switch to the other locale.
    ///
    /// Output:
    /// - The newly active locale
    pub fn toggle(&mut self) -> Locale {
        let next = self.active.toggle();
        self.set_locale(next);
        next
    }

    /// What: Resolve a dotted key in the active locale.
    ///
    /// Inputs:
    /// - `key`: Dot-notation key (e.g., "nav.home")
    ///
    /// Output:
    /// - Translated string, or `key` verbatim when it does not resolve
    #[must_use]
    pub fn translate(&self, key: &str) -> String {
        self.catalog.tree(self.active).map_or_else(
            || key.to_string(),
            |tree| translate_or_key(tree, key, self.active.code()),
        )
    }

    /// Supported locales in selector order.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub const fn supported_locales(&self) -> &'static [Locale] {
        Locale::all()
    }

    /// What: Endonym for a raw locale code.
    ///
    /// Inputs:
    /// - `code`: Raw locale code
    ///
    /// Output:
    /// - Label such as `"English"` or `"मराठी"`, regardless of the active locale
    ///
    /// # Errors
    /// - Returns `I18nError::InvalidLocale` for unsupported codes
    #[allow(clippy::unused_self)]
    pub fn display_name(&self, code: &str) -> Result<&'static str, I18nError> {
        code.parse::<Locale>().map(Locale::display_name)
    }

    /// What: Register a callback invoked after every locale change.
    ///
    /// Inputs:
    /// - `listener`: Callback receiving the new locale
    ///
    /// Output:
    /// - Id for [`LocaleStore::unsubscribe`]
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(Locale) + 'static,
    {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// What: Remove a previously registered callback.
    ///
    /// Output:
    /// - `true` if the id was registered
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    /// Translation trees backing this store.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Preference storage backing this store.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Tear down the store, returning its storage (e.g., to reopen a later session).
    #[must_use]
    pub fn into_storage(self) -> S {
        self.storage
    }
}
