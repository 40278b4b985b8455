//! Loading catalogs from a locales directory.

use std::fs;

use sacred_temple::I18nError;
use sacred_temple::i18n::{Catalog, Locale, LocaleLoader, MissingKey};

#[test]
/// What: The checked-in locale files load and agree with the built-in catalog.
fn repository_locales_match_embedded() {
    let dir = sacred_temple::i18n::find_locales_dir().expect("config/locales in checkout");
    let from_dir = Catalog::from_dir(&dir).expect("locale files parse");
    let embedded = Catalog::embedded().expect("embedded catalog parses");
    for &locale in Locale::all() {
        assert_eq!(from_dir.key_paths(locale), embedded.key_paths(locale));
        assert_eq!(
            from_dir.resolve(locale, "hero.title"),
            embedded.resolve(locale, "hero.title")
        );
    }
    assert!(from_dir.audit().is_empty());
}

#[test]
/// What: A directory without every supported locale is rejected.
fn from_dir_requires_every_locale() {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(dir.path().join("en.yml"), "en:\n  nav:\n    home: \"Home\"\n")
        .expect("write en.yml");
    let err = Catalog::from_dir(dir.path()).expect_err("mr.yml is missing");
    assert!(matches!(err, I18nError::Load { .. }), "got {err:?}");
}

#[test]
/// What: Drift between locale files is reported per missing key.
fn audit_reports_drift_between_files() {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(
        dir.path().join("en.yml"),
        "en:\n  nav:\n    home: \"Home\"\n    about: \"About\"\n",
    )
    .expect("write en.yml");
    fs::write(
        dir.path().join("mr.yml"),
        "mr:\n  nav:\n    home: \"मुख्यपृष्ठ\"\n  footer:\n    copyright: \"©\"\n",
    )
    .expect("write mr.yml");

    let catalog = Catalog::from_dir(dir.path()).expect("both files parse");
    assert_eq!(
        catalog.audit(),
        vec![
            MissingKey {
                locale: Locale::En,
                key: "footer.copyright".to_string(),
            },
            MissingKey {
                locale: Locale::Mr,
                key: "nav.about".to_string(),
            },
        ]
    );
}

#[test]
/// What: The loader caches parsed trees and reports malformed files.
fn loader_caches_and_reports_errors() {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(dir.path().join("en.yml"), "en:\n  nav:\n    home: \"Home\"\n")
        .expect("write en.yml");
    fs::write(dir.path().join("mr.yml"), "mr: [unclosed\n").expect("write mr.yml");

    let mut loader = LocaleLoader::new(dir.path().to_path_buf());
    let first = loader.load("en").expect("en parses");
    fs::remove_file(dir.path().join("en.yml")).expect("remove en.yml");
    let cached = loader.load("en").expect("served from cache");
    assert_eq!(first, cached);
    assert_eq!(cached.lookup("nav.home"), Some("Home"));

    assert!(matches!(loader.load("mr"), Err(I18nError::Load { .. })));
    assert!(matches!(loader.load("fr"), Err(I18nError::Load { .. })));
}
