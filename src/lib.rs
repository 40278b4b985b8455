//! Library entry for the Sacred Temple site core: translation catalog,
//! locale preference store and page content model.

pub mod error;
pub mod i18n;
pub mod page;
pub mod preferences;

#[cfg(test)]
mod test_utils;

pub use error::I18nError;
