use crate::report::LoadReport;

/// Errors surfaced while building a catalog store.
///
/// Query misses are not errors: every lookup returns `Option`, so `None` is
/// the whole of the not-found story and nothing here is thrown on the query
/// path.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to parse catalog source: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to read catalog source: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(String),

    /// Strict-mode refusal: the source contained schema violations. The
    /// full report (including duplicates and warnings found before the
    /// refusal) rides along for diagnostics.
    #[error("catalog rejected in strict mode: {} schema violation(s)", report.violations.len())]
    Rejected { report: LoadReport },
}
