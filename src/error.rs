//! Error type shared by the locale store, catalog loader, and preference storage.

use std::fmt;
use std::path::PathBuf;

/// Errors surfaced by the i18n core.
///
/// Missing translations are deliberately not represented here: they resolve to
/// the key itself and never fail.
#[derive(Debug)]
pub enum I18nError {
    /// A locale code outside the supported set was supplied.
    InvalidLocale(String),
    /// A locale file could not be loaded or parsed.
    Load {
        /// File (or directory) that failed to load.
        path: PathBuf,
        /// Human-readable description of the failure.
        reason: String,
    },
    /// Underlying I/O failure while reading or writing preferences.
    Io(std::io::Error),
}

impl fmt::Display for I18nError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLocale(code) => write!(
                f,
                "unsupported locale '{code}' (expected one of: {})",
                crate::i18n::Locale::all()
                    .iter()
                    .map(|l| l.code())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            Self::Load { path, reason } => {
                write!(f, "failed to load {}: {reason}", path.display())
            }
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for I18nError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::InvalidLocale(_) | Self::Load { .. } => None,
        }
    }
}

impl From<std::io::Error> for I18nError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}
