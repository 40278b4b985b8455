//! Supported locales and their fixed metadata.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::I18nError;

/// Locales the site ships translations for.
///
/// Declaration order is the order shown in the language selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English.
    En,
    /// Marathi (मराठी), the default for first-time visitors.
    Mr,
}

impl Locale {
    /// Locale adopted when nothing valid has been persisted yet.
    ///
    /// This is intentionally the regional locale, not the first declared one.
    pub const DEFAULT: Self = Self::Mr;

    /// What: Return the raw locale code used in files and persisted preferences.
    ///
    /// Output:
    /// - `"en"` or `"mr"`
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Mr => "mr",
        }
    }

    /// What: Return the endonym shown in the language selector.
    ///
    /// Output:
    /// - Label written in the locale's own script, independent of the active locale
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Mr => "मराठी",
        }
    }

    /// What: Parse a raw locale code.
    ///
    /// Inputs:
    /// - `code`: Locale code such as `"en"` or `"mr"`
    ///
    /// Output:
    /// - `Some(Locale)` for supported codes, `None` otherwise
    ///
    /// Details:
    /// - Exact match only; persisted values are written by this crate and never
    ///   need case folding or region stripping.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Self::En),
            "mr" => Some(Self::Mr),
            _ => None,
        }
    }

    /// All supported locales, in selector order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::En, Self::Mr]
    }

    /// The other locale; drives the header's two-state toggle.
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::En => Self::Mr,
            Self::Mr => Self::En,
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| I18nError::InvalidLocale(s.to_string()))
    }
}
