//! Shared utilities for argument processing.

use sacred_temple::page::Section;

/// What: Determine the log level based on command-line arguments.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Log level string (trace, debug, info, warn, error).
///
/// Details:
/// - Verbose flag overrides `log_level` argument.
pub fn determine_log_level(args: &crate::args::Args) -> String {
    if args.verbose {
        "debug".to_string()
    } else {
        args.log_level.clone()
    }
}

/// What: Parse a `--section` value.
///
/// Inputs:
/// - `value`: Raw argument (anchor id, optional leading `#`).
///
/// Output:
/// - Matching section, or a message listing the valid names.
pub fn parse_section(value: &str) -> Result<Section, String> {
    Section::from_anchor(value).ok_or_else(|| {
        let names: Vec<&str> = Section::ALL.iter().map(|s| s.anchor()).collect();
        format!(
            "unknown section '{value}' (expected one of: {})",
            names.join(", ")
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    /// What: Ensure `--verbose` wins over `--log-level`.
    fn determine_log_level_verbose_overrides() {
        let args = crate::args::Args::parse_from(["sacred-temple", "--log-level", "warn"]);
        assert_eq!(determine_log_level(&args), "warn");
        let args = crate::args::Args::parse_from(["sacred-temple", "--log-level", "warn", "-v"]);
        assert_eq!(determine_log_level(&args), "debug");
    }

    #[test]
    /// What: Ensure section parsing accepts anchors and lists choices on error.
    fn parse_section_values() {
        assert_eq!(parse_section("#events"), Ok(Section::Events));
        let err = parse_section("footer").expect_err("footer is not a section");
        assert!(err.contains("home, about, activities, events, donate, contact"));
    }
}
