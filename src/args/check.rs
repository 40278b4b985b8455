//! Catalog drift check (`--check`).

use sacred_temple::i18n::{Catalog, Locale, MissingKey};

/// What: Format an audit report.
///
/// Inputs:
/// - `missing`: Audit result, sorted.
///
/// Output:
/// - Summary line, followed by the missing keys as a YAML list when there are any.
///
/// Details:
/// - Falls back to one `locale: key` line per entry if YAML serialization fails.
pub fn format_report(missing: &[MissingKey]) -> String {
    if missing.is_empty() {
        let codes: Vec<&str> = Locale::all().iter().map(|l| l.code()).collect();
        return format!("catalog OK: {} share the same keys\n", codes.join(", "));
    }
    let body = serde_norway::to_string(missing).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to serialize audit report as YAML");
        missing
            .iter()
            .map(|m| format!("{}: {}\n", m.locale, m.key))
            .collect()
    });
    format!("{} missing key(s):\n{body}", missing.len())
}

/// What: Audit the catalog and print the report.
///
/// Inputs:
/// - `catalog`: Catalog to audit.
///
/// Output:
/// - `true` when every locale has the same keys, `false` otherwise.
pub fn handle_check(catalog: &Catalog) -> bool {
    let missing = catalog.audit();
    if missing.is_empty() {
        tracing::info!("catalog check passed");
    } else {
        tracing::warn!(count = missing.len(), "catalog check found missing keys");
    }
    print!("{}", format_report(&missing));
    missing.is_empty()
}
