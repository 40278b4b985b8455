//! Rendering the page through a store, as the binary does.

use sacred_temple::i18n::{Catalog, Locale, LocaleStore};
use sacred_temple::page::{Section, render_page, render_section};
use sacred_temple::preferences::{FileStorage, MemoryStorage, preferences_path};
use unicode_width::UnicodeWidthStr;

#[test]
/// What: Page renders every section heading in the saved language.
fn page_uses_saved_language() {
    let dir = tempfile::tempdir().expect("temp dir");
    std::fs::write(preferences_path(dir.path()), "temple-language = en\n")
        .expect("write preferences");
    let catalog = Catalog::embedded().expect("embedded catalog parses");
    let store = LocaleStore::open(catalog, FileStorage::new(preferences_path(dir.path())));

    let page = render_page(&store);
    for heading in [
        "Welcome to Sacred Temple",
        "About Our Temple",
        "Our Activities",
        "Upcoming Events",
        "Support Our Mission",
        "Contact Us",
    ] {
        assert!(page.contains(heading), "{heading} missing");
    }
    assert!(page.contains("© 2024 Sacred Temple."));
}

#[test]
/// What: Sections appear in navigation order on the page.
fn sections_in_page_order() {
    let catalog = Catalog::embedded().expect("embedded catalog parses");
    let mut store = LocaleStore::open(catalog, MemoryStorage::new());
    store.set_locale(Locale::En);
    let page = render_page(&store);
    let positions: Vec<usize> = Section::ALL
        .iter()
        .map(|&s| {
            let first_line = render_section(&store, s)
                .lines()
                .next()
                .expect("section has a heading")
                .to_string();
            page.find(&first_line).expect("section rendered on page")
        })
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
}

#[test]
/// What: Marathi temple hours line up in one column.
///
/// Details:
/// - Every hours value starts with a single-digit `H:00`, so the column starts four bytes before ` AM - `.
fn marathi_hours_are_aligned() {
    let catalog = Catalog::embedded().expect("embedded catalog parses");
    let store = LocaleStore::open(catalog, MemoryStorage::new());
    assert_eq!(store.locale(), Locale::Mr);
    let contact = render_section(&store, Section::Contact);
    let columns: Vec<usize> = contact
        .lines()
        .filter_map(|line| line.find(" AM - ").map(|i| line[..i - "6:00".len()].width()))
        .collect();
    assert_eq!(columns.len(), 3);
    assert!(columns.iter().all(|&c| c == columns[0]), "{columns:?}");
}
