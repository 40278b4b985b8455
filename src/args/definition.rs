//! Command-line argument definition and processing.

use std::path::PathBuf;

use clap::Parser;
use sacred_temple::I18nError;
use sacred_temple::i18n::{Catalog, LocaleStore};
use sacred_temple::page::Section;
use sacred_temple::preferences::{FileStorage, preferences_path};

use crate::args::utils::parse_section;
use crate::args::{check, languages, show};

/// Sacred Temple - terminal preview of the temple site in English or Marathi
#[derive(Parser, Debug)]
#[command(name = "sacred-temple")]
#[command(version)]
#[command(about = "Terminal preview of the Sacred Temple site in English or Marathi", long_about = None)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Switch to a language and remember it (en, mr)
    #[arg(long, value_name = "CODE")]
    pub lang: Option<String>,

    /// Switch to the other language and remember it
    #[arg(long, conflicts_with = "lang")]
    pub toggle: bool,

    /// Print only one section (home, about, activities, events, donate, contact)
    #[arg(long, value_name = "NAME", value_parser = parse_section)]
    pub section: Option<Section>,

    /// Print the translation of one dotted key (e.g., nav.home)
    #[arg(long, value_name = "KEY", conflicts_with = "section")]
    pub key: Option<String>,

    /// List the available languages and mark the active one
    #[arg(long)]
    pub list_languages: bool,

    /// Report keys missing from any language and exit non-zero on drift
    #[arg(long)]
    pub check: bool,

    /// Load locale files from this directory instead of the built-in ones
    #[arg(long, value_name = "DIR")]
    pub locales_dir: Option<PathBuf>,

    /// Specify the configuration directory (default: ~/.config/sacred-temple)
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,
}

/// What: Build the catalog selected by the arguments.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Catalog from `--locales-dir`, or the built-in catalog.
///
/// # Errors
/// - Returns `I18nError::Load` when a locale file is missing or malformed.
fn load_catalog(args: &Args) -> Result<Catalog, I18nError> {
    match &args.locales_dir {
        Some(dir) => {
            tracing::info!(dir = %dir.display(), "loading locales from directory");
            Catalog::from_dir(dir)
        }
        None => Catalog::embedded(),
    }
}

/// What: Run the action requested on the command line.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
/// - `config_dir`: Resolved configuration directory.
///
/// Output:
/// - `Ok(true)` on success, `Ok(false)` when `--check` found drift.
///
/// # Errors
/// - Returns `I18nError::Load` when the catalog cannot be loaded.
/// - Returns `I18nError::InvalidLocale` when `--lang` names an unsupported language.
///
/// Details:
/// - `--check` runs before the store is opened and never touches preferences.
/// - `--lang`/`--toggle` are applied (and persisted) before any output.
/// - Output precedence: `--list-languages`, `--key`, `--section`, then the whole page.
pub fn process_args(args: &Args, config_dir: &std::path::Path) -> Result<bool, I18nError> {
    let catalog = load_catalog(args)?;

    if args.check {
        return Ok(check::handle_check(&catalog));
    }

    let storage = FileStorage::new(preferences_path(config_dir));
    let mut store = LocaleStore::open(catalog, storage);

    if let Some(code) = &args.lang {
        store.select(code)?;
    } else if args.toggle {
        store.toggle();
    }

    if args.list_languages {
        languages::handle_list_languages(&store);
    } else if let Some(key) = &args.key {
        show::handle_key(&store, key);
    } else if let Some(section) = args.section {
        show::handle_section(&store, section);
    } else {
        show::handle_page(&store);
    }
    Ok(true)
}
