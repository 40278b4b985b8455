//! Store lifecycle against a real preferences file.

use std::cell::RefCell;
use std::rc::Rc;

use sacred_temple::I18nError;
use sacred_temple::i18n::{Catalog, Locale, LocaleStore, t};
use sacred_temple::preferences::{FileStorage, LANGUAGE_KEY, PreferenceStorage, preferences_path};

/// What: Open a store on `<dir>/preferences.conf` with the built-in catalog.
fn open_in(dir: &std::path::Path) -> LocaleStore<FileStorage> {
    let catalog = Catalog::embedded().expect("embedded catalog parses");
    LocaleStore::open(catalog, FileStorage::new(preferences_path(dir)))
}

#[test]
/// What: Fresh store defaults to Marathi and switching to English is persisted.
///
/// Details:
/// - Mirrors a first visit followed by a click on the English option.
fn fresh_store_then_switch_to_english() {
    let dir = tempfile::tempdir().expect("temp dir");
    let mut store = open_in(dir.path());
    assert_eq!(store.locale(), Locale::Mr);
    assert_eq!(t(&store, "nav.home"), "मुख्यपृष्ठ");

    store.set_locale(Locale::En);
    assert_eq!(t(&store, "nav.home"), "Home");
    assert_eq!(
        store
            .storage()
            .read(LANGUAGE_KEY)
            .expect("preferences readable")
            .as_deref(),
        Some("en")
    );
}

#[test]
/// What: Every supported locale survives reopening the store on the same file.
fn locale_round_trips_through_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    for &locale in Locale::all() {
        let mut store = open_in(dir.path());
        store.set_locale(locale);
        drop(store);
        assert_eq!(open_in(dir.path()).locale(), locale);
    }
}

#[test]
/// What: Unsupported or garbage persisted values fall back to Marathi.
fn invalid_persisted_value_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = preferences_path(dir.path());
    for content in ["temple-language = fr\n", "temple-language =\n", "# only a comment\n"] {
        std::fs::write(&path, content).expect("write preferences");
        assert_eq!(open_in(dir.path()).locale(), Locale::Mr, "content {content:?}");
    }
}

#[test]
/// What: A stale or missing persisted value is replaced by the adopted locale on open.
///
/// Details:
/// - After the rewrite, an explicit Marathi selection leaves a clean file behind.
fn stale_persisted_value_is_rewritten() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = preferences_path(dir.path());
    std::fs::write(&path, "theme = dark\ntemple-language = fr\n").expect("write preferences");

    let mut store = open_in(dir.path());
    assert_eq!(
        std::fs::read_to_string(&path).expect("read preferences"),
        "theme = dark\ntemple-language = mr\n"
    );
    assert_eq!(store.select("mr").expect("mr is supported"), Locale::Mr);
    drop(store);
    assert_eq!(
        std::fs::read_to_string(&path).expect("read preferences"),
        "theme = dark\ntemple-language = mr\n"
    );

    let fresh = tempfile::tempdir().expect("temp dir");
    let mut store = open_in(fresh.path());
    store.set_locale(Locale::Mr);
    assert_eq!(
        std::fs::read_to_string(preferences_path(fresh.path())).expect("fresh file written"),
        "temple-language = mr\n"
    );
}

#[test]
/// What: Saving the locale keeps comments and unrelated keys in the file.
fn persistence_preserves_other_lines() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = preferences_path(dir.path());
    std::fs::write(
        &path,
        "# Sacred Temple preferences\ntheme = dark\ntemple-language = mr\n",
    )
    .expect("write preferences");

    let mut store = open_in(dir.path());
    store.set_locale(Locale::En);

    let saved = std::fs::read_to_string(&path).expect("read preferences");
    assert_eq!(
        saved,
        "# Sacred Temple preferences\ntheme = dark\ntemple-language = en\n"
    );
}

#[test]
/// What: Rejected selections leave state and file untouched, and observers are not called.
fn rejected_selection_keeps_state() {
    let dir = tempfile::tempdir().expect("temp dir");
    let mut store = open_in(dir.path());
    let calls = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&calls);
    store.subscribe(move |locale| sink.borrow_mut().push(locale));

    let err = store.select("fr").expect_err("fr is not supported");
    assert!(matches!(err, I18nError::InvalidLocale(ref code) if code == "fr"));
    assert_eq!(store.locale(), Locale::Mr);
    assert_eq!(
        std::fs::read_to_string(preferences_path(dir.path())).expect("default written on open"),
        "temple-language = mr\n"
    );
    assert!(calls.borrow().is_empty());

    assert_eq!(store.select("en").expect("en is supported"), Locale::En);
    assert_eq!(*calls.borrow(), vec![Locale::En]);
}

#[test]
/// What: Unknown keys come back verbatim in every locale.
fn unknown_keys_fall_back_to_key() {
    let dir = tempfile::tempdir().expect("temp dir");
    let mut store = open_in(dir.path());
    for &locale in Locale::all() {
        store.set_locale(locale);
        assert_eq!(t(&store, "nav.nonexistent"), "nav.nonexistent");
        assert_eq!(t(&store, "nav"), "nav");
        assert_eq!(t(&store, "nav.home.extra"), "nav.home.extra");
    }
}

#[test]
/// What: Every catalog key resolves to the same non-empty string on repeated calls.
fn translations_are_deterministic() {
    let dir = tempfile::tempdir().expect("temp dir");
    let mut store = open_in(dir.path());
    for &locale in Locale::all() {
        store.set_locale(locale);
        for key in store.catalog().key_paths(locale) {
            let first = t(&store, &key);
            assert!(!first.is_empty());
            assert_ne!(first, key, "{key} unresolved in {locale}");
            assert_eq!(first, t(&store, &key));
        }
    }
}
