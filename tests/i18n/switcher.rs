//! Language selector wired to a store over in-memory preferences.

use std::cell::Cell;
use std::rc::Rc;

use sacred_temple::i18n::{Catalog, LanguageSwitcher, Locale, LocaleStore};
use sacred_temple::preferences::{LANGUAGE_KEY, MemoryStorage};

#[test]
/// What: Selecting through the switcher updates options, storage and observers.
///
/// Details:
/// - Simulates a header re-rendering on every notification.
fn selection_flows_through_store() {
    let catalog = Catalog::embedded().expect("embedded catalog parses");
    let mut store = LocaleStore::open(catalog, MemoryStorage::new());
    let renders = Rc::new(Cell::new(0_u32));
    let counter = Rc::clone(&renders);
    let id = store.subscribe(move |_| counter.set(counter.get() + 1));

    let selected: Vec<Locale> = LanguageSwitcher::options(&store)
        .into_iter()
        .filter(|o| o.selected)
        .map(|o| o.locale)
        .collect();
    assert_eq!(selected, vec![Locale::Mr]);

    LanguageSwitcher::on_select(&mut store, "en").expect("en is supported");
    LanguageSwitcher::on_select(&mut store, "en").expect("repeat selection is accepted");
    assert_eq!(renders.get(), 1);
    assert_eq!(store.storage().get(LANGUAGE_KEY), Some("en"));

    assert!(store.unsubscribe(id));
    LanguageSwitcher::on_select(&mut store, "mr").expect("mr is supported");
    assert_eq!(renders.get(), 1);
    assert_eq!(store.storage().get(LANGUAGE_KEY), Some("mr"));
}

#[test]
/// What: A saved preference is reflected in the options of a new store.
fn saved_preference_preselects_option() {
    let catalog = Catalog::embedded().expect("embedded catalog parses");
    let storage = MemoryStorage::with_value(LANGUAGE_KEY, "en");
    let store = LocaleStore::open(catalog, storage);
    let options = LanguageSwitcher::options(&store);
    assert_eq!(options.len(), 2);
    assert!(options.iter().any(|o| o.code == "en" && o.selected));
    assert_eq!(
        store.display_name("mr").expect("mr is supported"),
        "मराठी"
    );
    assert!(store.display_name("de").is_err());
}
