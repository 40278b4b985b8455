//! Translation catalog: one nested string tree per supported locale.
//!
//! Trees are stored as they appear in the locale files (no flattening) and
//! walked segment by segment on lookup, so addressing a branch as if it were
//! a leaf is a miss rather than an accidental match.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::I18nError;
use crate::i18n::Locale;
use crate::i18n::loader;

/// Node of a locale tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Mapping from key segment to child node.
    Branch(BTreeMap<String, Node>),
    /// Display string.
    Leaf(String),
}

impl Node {
    /// What: Resolve a dotted key against this node.
    ///
    /// Inputs:
    /// - `dotted_key`: Path such as `"activities.meditation.title"`
    ///
    /// Output:
    /// - `Some(&str)` when the full path ends on a leaf, `None` otherwise
    ///
    /// Details:
    /// - Fails as soon as a leaf is reached before the path is exhausted
    /// - Fails when the path ends on a branch
    #[must_use]
    pub fn lookup(&self, dotted_key: &str) -> Option<&str> {
        let mut current = self;
        for segment in dotted_key.split('.') {
            match current {
                Self::Branch(children) => current = children.get(segment)?,
                Self::Leaf(_) => return None,
            }
        }
        match current {
            Self::Leaf(text) => Some(text),
            Self::Branch(_) => None,
        }
    }

    /// All dotted paths below this node that end on a leaf.
    #[must_use]
    pub fn leaf_paths(&self) -> BTreeSet<String> {
        let mut out = BTreeSet::new();
        collect_leaf_paths(self, "", &mut out);
        out
    }
}

/// Depth-first walk accumulating `prefix.segment` paths for every leaf.
fn collect_leaf_paths(node: &Node, prefix: &str, out: &mut BTreeSet<String>) {
    match node {
        Node::Leaf(_) => {
            out.insert(prefix.to_string());
        }
        Node::Branch(children) => {
            for (segment, child) in children {
                let path = if prefix.is_empty() {
                    segment.clone()
                } else {
                    format!("{prefix}.{segment}")
                };
                collect_leaf_paths(child, &path, out);
            }
        }
    }
}

/// A key present in some locale but missing from `locale`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct MissingKey {
    /// Locale lacking the key.
    pub locale: Locale,
    /// Dotted key.
    pub key: String,
}

/// Read-only set of translation trees, one per supported locale.
#[derive(Debug, Clone)]
pub struct Catalog {
    trees: BTreeMap<Locale, Node>,
}

impl Catalog {
    /// What: Build a catalog from per-locale trees.
    ///
    /// Inputs:
    /// - `trees`: Root node for each locale
    ///
    /// Output:
    /// - `Ok(Catalog)` when every supported locale has a tree
    ///
    /// # Errors
    /// - Returns `I18nError::Load` naming the first supported locale without a tree
    pub fn new(trees: BTreeMap<Locale, Node>) -> Result<Self, I18nError> {
        if let Some(missing) = Locale::all().iter().find(|l| !trees.contains_key(*l)) {
            return Err(I18nError::Load {
                path: PathBuf::from(format!("{}.yml", missing.code())),
                reason: format!("no tree for locale '{}'", missing.code()),
            });
        }
        Ok(Self { trees })
    }

    /// What: Build the catalog from the locale files compiled into the binary.
    ///
    /// # Errors
    /// - Returns `I18nError::Load` if an embedded file fails to parse
    pub fn embedded() -> Result<Self, I18nError> {
        let mut trees = BTreeMap::new();
        for &locale in Locale::all() {
            trees.insert(locale, loader::load_embedded(locale)?);
        }
        Self::new(trees)
    }

    /// What: Build the catalog from `{code}.yml` files in a directory.
    ///
    /// Inputs:
    /// - `locales_dir`: Directory containing `en.yml` and `mr.yml`
    ///
    /// # Errors
    /// - Returns `I18nError::Load` when any supported locale file is missing or invalid
    pub fn from_dir(locales_dir: &Path) -> Result<Self, I18nError> {
        let mut loader = loader::LocaleLoader::new(locales_dir.to_path_buf());
        let mut trees = BTreeMap::new();
        for &locale in Locale::all() {
            trees.insert(locale, loader.load(locale.code())?);
        }
        tracing::debug!(dir = %locales_dir.display(), "loaded locale catalog from directory");
        Self::new(trees)
    }

    /// What: Resolve a dotted key for a locale.
    ///
    /// Inputs:
    /// - `locale`: Locale whose tree is walked
    /// - `dotted_key`: Key such as `"nav.home"`
    ///
    /// Output:
    /// - Leaf string, or `None` when the key is absent or names a branch
    #[must_use]
    pub fn resolve(&self, locale: Locale, dotted_key: &str) -> Option<&str> {
        self.trees.get(&locale)?.lookup(dotted_key)
    }

    /// Root tree for a locale.
    #[must_use]
    pub fn tree(&self, locale: Locale) -> Option<&Node> {
        self.trees.get(&locale)
    }

    /// All leaf keys defined for `locale`.
    #[must_use]
    pub fn key_paths(&self, locale: Locale) -> BTreeSet<String> {
        self.trees
            .get(&locale)
            .map(Node::leaf_paths)
            .unwrap_or_default()
    }

    /// What: Report keys that exist in one locale but not in another.
    ///
    /// Output:
    /// - Sorted list of `MissingKey`; empty when all trees share the same shape
    ///
    /// Details:
    /// - A key that is a leaf in one locale and a branch in another counts as
    ///   missing from the latter
    #[must_use]
    pub fn audit(&self) -> Vec<MissingKey> {
        let per_locale: Vec<(Locale, BTreeSet<String>)> = Locale::all()
            .iter()
            .map(|&l| (l, self.key_paths(l)))
            .collect();
        let union: BTreeSet<&String> = per_locale.iter().flat_map(|(_, keys)| keys).collect();

        let mut missing = Vec::new();
        for (locale, keys) in &per_locale {
            for key in &union {
                if !keys.contains(*key) {
                    missing.push(MissingKey {
                        locale: *locale,
                        key: (*key).clone(),
                    });
                }
            }
        }
        missing.sort();
        missing
    }
}
