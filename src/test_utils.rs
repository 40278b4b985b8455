//! Test utilities for common test setup.
//!
//! This module provides shared test helpers used across multiple test modules.

#[cfg(test)]
use crate::i18n::{Catalog, LocaleStore};
#[cfg(test)]
use crate::preferences::PreferenceStorage;

#[cfg(test)]
/// What: Provide a `LocaleStore` over the embedded catalog for store and page tests.
///
/// Inputs:
/// - `storage`: Preference storage to open the store on
///
/// Output: Active store initialized from `storage`
pub fn new_store<S: PreferenceStorage>(storage: S) -> LocaleStore<S> {
    LocaleStore::open(
        Catalog::embedded().expect("embedded catalog parses"),
        storage,
    )
}
