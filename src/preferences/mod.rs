//! Persisted user preferences.
//!
//! The only preference today is the selected locale, stored as one
//! `temple-language = <code>` line in `<config_dir>/preferences.conf`.

/// Key-value line parsing.
mod parsing;
/// Config, log, and preferences file locations.
mod paths;
/// Storage backends.
mod storage;

pub use paths::{APP_DIR_NAME, PREFERENCES_FILE, config_dir, logs_dir, preferences_path};
pub use storage::{FileStorage, MemoryStorage, PreferenceStorage};

/// Key under which the selected locale is persisted.
pub const LANGUAGE_KEY: &str = "temple-language";

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(test)]
/// What: Provide a process-wide mutex to serialize environment-mutating tests in this module.
///
/// Output:
/// - Shared reference to a lazily-initialized `Mutex<()>`.
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}
