use crate::error::CatalogError;

/// Load-time policy for schema violations.
///
/// The source data already contains anomalies (duplicate ids, polymorphic
/// field shapes), so lenient is the default: offending records are skipped
/// and logged rather than rejecting the whole catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationMode {
    /// Any schema violation aborts construction.
    Strict,
    /// Offending records are excluded; violations are logged and reported.
    #[default]
    Lenient,
}

impl ValidationMode {
    /// Parse the textual form used in configuration ("strict" / "lenient",
    /// case-insensitive).
    pub fn parse(value: &str) -> Result<Self, CatalogError> {
        match value.to_ascii_lowercase().as_str() {
            "strict" => Ok(ValidationMode::Strict),
            "lenient" => Ok(ValidationMode::Lenient),
            other => Err(CatalogError::Config(format!(
                "invalid validation mode '{other}' (expected 'strict' or 'lenient')"
            ))),
        }
    }
}

/// Catalog construction options.
#[derive(Debug, Clone, Copy)]
pub struct CatalogConfig {
    pub mode: ValidationMode,
    /// Whether `categories()` lists categories that hold zero herbs. The
    /// source ships at least one ("immune-support") that must be
    /// preservable either way.
    pub include_empty_categories: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            mode: ValidationMode::Lenient,
            include_empty_categories: true,
        }
    }
}

impl CatalogConfig {
    /// Load options from environment variables.
    ///
    /// Optional:
    /// - `HERB_VALIDATION_MODE`: "strict" or "lenient" (default lenient)
    /// - `HERB_INCLUDE_EMPTY_CATEGORIES`: "true" or "false" (default true)
    pub fn from_env() -> Result<Self, CatalogError> {
        let mut config = Self::default();

        if let Ok(mode) = std::env::var("HERB_VALIDATION_MODE") {
            config.mode = ValidationMode::parse(&mode)?;
        }

        if let Ok(flag) = std::env::var("HERB_INCLUDE_EMPTY_CATEGORIES") {
            config.include_empty_categories = match flag.to_ascii_lowercase().as_str() {
                "true" | "1" => true,
                "false" | "0" => false,
                other => {
                    return Err(CatalogError::Config(format!(
                        "invalid HERB_INCLUDE_EMPTY_CATEGORIES '{other}' (expected true/false)"
                    )))
                }
            };
        }

        Ok(config)
    }

    pub fn strict() -> Self {
        Self {
            mode: ValidationMode::Strict,
            ..Self::default()
        }
    }

    pub fn lenient() -> Self {
        Self::default()
    }
}
