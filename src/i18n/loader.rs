//! Locale file loading and parsing.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::I18nError;
use crate::i18n::Locale;
use crate::i18n::catalog::Node;

/// English locale file, compiled in.
const EMBEDDED_EN: &str = include_str!("../../config/locales/en.yml");
/// Marathi locale file, compiled in.
const EMBEDDED_MR: &str = include_str!("../../config/locales/mr.yml");

/// What: Return the compiled-in YAML source for a locale.
const fn embedded_source(locale: Locale) -> &'static str {
    match locale {
        Locale::En => EMBEDDED_EN,
        Locale::Mr => EMBEDDED_MR,
    }
}

/// What: Parse the compiled-in locale file for `locale`.
///
/// Inputs:
/// - `locale`: Supported locale
///
/// Output:
/// - Root `Node` of the locale tree
///
/// # Errors
/// - Returns `I18nError::Load` if the embedded YAML is malformed (only possible after a bad edit
///   to `config/locales/`)
pub fn load_embedded(locale: Locale) -> Result<Node, I18nError> {
    parse_locale_yaml(locale.code(), embedded_source(locale)).map_err(|reason| I18nError::Load {
        path: PathBuf::from(format!("config/locales/{}.yml", locale.code())),
        reason,
    })
}

/// What: Load a locale YAML file and parse it into a locale tree.
///
/// Inputs:
/// - `locale`: Locale code (e.g., "mr")
/// - `locales_dir`: Path to locales directory
///
/// Output:
/// - `Result<Node, I18nError>` containing the tree or error
///
/// # Errors
/// - Returns `Err` when the locale code is empty or has an invalid format
/// - Returns `Err` when the locale file does not exist in the locales directory
/// - Returns `Err` when the locale file cannot be read (I/O error)
/// - Returns `Err` when the locale file is empty
/// - Returns `Err` when the YAML content cannot be parsed or lacks the top-level locale key
///
/// Details:
/// - Loads file from `locales_dir/{locale}.yml`
/// - Validates locale format before attempting to load
pub fn load_locale_file(locale: &str, locales_dir: &Path) -> Result<Node, I18nError> {
    let file_path = locales_dir.join(format!("{locale}.yml"));
    let fail = |reason: String| I18nError::Load {
        path: file_path.clone(),
        reason,
    };

    if locale.is_empty() {
        return Err(fail("Locale code cannot be empty".to_string()));
    }

    if !is_valid_locale_format(locale) {
        return Err(fail(format!(
            "Invalid locale code format: '{locale}'. Expected a short code such as 'en' or 'mr'"
        )));
    }

    if !file_path.exists() {
        return Err(fail("Locale file not found".to_string()));
    }

    let contents = fs::read_to_string(&file_path)
        .map_err(|e| fail(format!("Failed to read locale file: {e}")))?;

    if contents.trim().is_empty() {
        return Err(fail("Locale file is empty".to_string()));
    }

    parse_locale_yaml(locale, &contents)
        .map_err(|e| fail(format!("{e}. Please check YAML syntax.")))
}

/// What: Validate locale code format.
///
/// Inputs:
/// - `locale`: Locale code to validate
///
/// Output:
/// - `true` if format looks valid, `false` otherwise
///
/// Details:
/// - Guards the file name built from the code, so path separators and dots are rejected
fn is_valid_locale_format(locale: &str) -> bool {
    if locale.is_empty() || locale.len() > 20 {
        return false;
    }

    locale.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        && !locale.starts_with('-')
        && !locale.ends_with('-')
        && !locale.contains("--")
}

/// What: Parse YAML content into a locale tree.
///
/// Inputs:
/// - `locale`: Expected top-level key (e.g., "en")
/// - `yaml_content`: YAML file content as string
///
/// Output:
/// - `Result<Node, String>` with the tree below the top-level locale key
fn parse_locale_yaml(locale: &str, yaml_content: &str) -> Result<Node, String> {
    let doc: serde_norway::Value =
        serde_norway::from_str(yaml_content).map_err(|e| format!("Failed to parse YAML: {e}"))?;

    let Some(root) = doc.as_mapping() else {
        return Err("Expected a mapping at the document root".to_string());
    };
    let Some(locale_value) = root.get(locale) else {
        return Err(format!("Missing top-level '{locale}:' key"));
    };

    match yaml_to_node(locale_value, locale) {
        Some(node @ Node::Branch(_)) => Ok(node),
        _ => Err(format!("Top-level '{locale}:' key must hold a mapping")),
    }
}

/// What: Recursively convert a YAML value into a `Node`.
///
/// Inputs:
/// - `value`: Current YAML value
/// - `path`: Dotted path of `value`, used in log messages
///
/// Output:
/// - `Some(Node)` for mappings and scalars, `None` for values that are skipped
///
/// Details:
/// - Non-string scalars (numbers, booleans) become their string form
/// - Sequences are kept as their YAML rendering
/// - Nulls, non-string keys, and keys containing `.` are skipped with a warning
fn yaml_to_node(value: &serde_norway::Value, path: &str) -> Option<Node> {
    match value {
        serde_norway::Value::Mapping(map) => {
            let mut children = BTreeMap::new();
            for (key, val) in map {
                let Some(segment) = key.as_str() else {
                    tracing::warn!(path, "skipping non-string translation key");
                    continue;
                };
                if segment.contains('.') {
                    tracing::warn!(path, segment, "skipping translation key containing '.'");
                    continue;
                }
                let child_path = format!("{path}.{segment}");
                if let Some(child) = yaml_to_node(val, &child_path) {
                    children.insert(segment.to_string(), child);
                }
            }
            Some(Node::Branch(children))
        }
        serde_norway::Value::String(s) => Some(Node::Leaf(s.clone())),
        serde_norway::Value::Sequence(_) => serde_norway::to_string(value)
            .ok()
            .map(|yaml_str| Node::Leaf(yaml_str.trim().to_string())),
        serde_norway::Value::Null => {
            tracing::warn!(path, "skipping null translation value");
            None
        }
        _ => value
            .as_i64()
            .map(|n| n.to_string())
            .or_else(|| value.as_f64().map(|n| n.to_string()))
            .or_else(|| value.as_bool().map(|b| b.to_string()))
            .map(Node::Leaf),
    }
}

/// Locale loader that caches loaded trees.
pub struct LocaleLoader {
    /// Directory holding `{code}.yml` files.
    locales_dir: PathBuf,
    /// Parsed trees keyed by locale code.
    cache: HashMap<String, Node>,
}

impl LocaleLoader {
    /// What: Create a new `LocaleLoader`.
    ///
    /// Inputs:
    /// - `locales_dir`: Path to locales directory
    ///
    /// Output:
    /// - `LocaleLoader` instance
    #[must_use]
    pub fn new(locales_dir: PathBuf) -> Self {
        Self {
            locales_dir,
            cache: HashMap::new(),
        }
    }

    /// What: Load locale file, using cache if available.
    ///
    /// Inputs:
    /// - `locale`: Locale code to load
    ///
    /// Output:
    /// - `Result<Node, I18nError>` containing the tree
    ///
    /// # Errors
    /// - Returns `Err` when the locale file cannot be loaded (see `load_locale_file` for specific error conditions)
    ///
    /// Details:
    /// - Caches loaded trees to avoid re-reading files
    /// - Logs warnings for missing or invalid locale files
    pub fn load(&mut self, locale: &str) -> Result<Node, I18nError> {
        if let Some(cached) = self.cache.get(locale) {
            tracing::debug!(locale, "locale tree served from cache");
            return Ok(cached.clone());
        }
        match load_locale_file(locale, &self.locales_dir) {
            Ok(tree) => {
                tracing::debug!(
                    "Loaded locale '{}' with {} translation keys",
                    locale,
                    tree.leaf_paths().len()
                );
                self.cache.insert(locale.to_string(), tree.clone());
                Ok(tree)
            }
            Err(e) => {
                tracing::warn!("Failed to load locale '{}': {}", locale, e);
                Err(e)
            }
        }
    }

    /// What: Get locales directory path.
    #[must_use]
    pub fn locales_dir(&self) -> &Path {
        &self.locales_dir
    }
}
