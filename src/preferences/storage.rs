//! Key-value storage backends for the persisted locale preference.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::I18nError;
use crate::preferences::parsing::{normalize_key, parse_line};

/// Durable key-value area holding scalar preferences.
pub trait PreferenceStorage {
    /// What: Read the value stored under `key`.
    ///
    /// Output:
    /// - `Ok(None)` when nothing is stored
    ///
    /// # Errors
    /// - Returns `Err` when the backing store exists but cannot be read
    fn read(&self, key: &str) -> Result<Option<String>, I18nError>;

    /// What: Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    /// - Returns `Err` when the backing store cannot be written
    fn write(&mut self, key: &str, value: &str) -> Result<(), I18nError>;
}

/// Preferences kept in a `key = value` text file.
///
/// Comments and unrelated keys are preserved on write.
#[derive(Debug, Clone)]
pub struct FileStorage {
    /// Location of the preferences file.
    path: PathBuf,
}

impl FileStorage {
    /// Storage backed by `path`; the file is created on first write.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStorage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, I18nError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let wanted = normalize_key(key);
        // Last assignment wins, matching how the file reads top to bottom
        let value = content
            .lines()
            .filter_map(parse_line)
            .filter(|(k, _)| *k == wanted)
            .map(|(_, v)| v.to_string())
            .last();
        Ok(value)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), I18nError> {
        let mut lines: Vec<String> = match fs::read_to_string(&self.path) {
            Ok(content) => content.lines().map(ToString::to_string).collect(),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };
        let wanted = normalize_key(key);
        let mut replaced = false;
        for line in &mut lines {
            if parse_line(line).is_some_and(|(k, _)| k == wanted) {
                *line = format!("{key} = {value}");
                replaced = true;
            }
        }
        if !replaced {
            lines.push(format!("{key} = {value}"));
        }
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        let mut new_content = lines.join("\n");
        new_content.push('\n');
        fs::write(&self.path, new_content)?;
        Ok(())
    }
}

/// In-process storage, used for tests and for sessions run without a config directory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    /// Stored values keyed by normalized key.
    values: HashMap<String, String>,
}

impl MemoryStorage {
    /// Empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// What: Storage pre-seeded with one value.
    ///
    /// Inputs:
    /// - `key`: Preference key
    /// - `value`: Raw value, stored without validation
    #[must_use]
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut storage = Self::new();
        storage.values.insert(normalize_key(key), value.to_string());
        storage
    }

    /// Value currently stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(&normalize_key(key)).map(String::as_str)
    }
}

impl PreferenceStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, I18nError> {
        Ok(self.get(key).map(ToString::to_string))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), I18nError> {
        self.values.insert(normalize_key(key), value.to_string());
        Ok(())
    }
}
