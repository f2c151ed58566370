use crate::error::AppError;

/// Server configuration loaded explicitly from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind the HTTP listener to.
    pub bind_addr: String,
    /// Path to a catalog JSON file. `None` serves the embedded dataset.
    pub catalog_path: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `BIND_ADDR`: listen address (default "127.0.0.1:8570")
    /// - `HERB_CATALOG_PATH`: catalog JSON file (default: embedded dataset)
    ///
    /// The catalog validation options (`HERB_VALIDATION_MODE`,
    /// `HERB_INCLUDE_EMPTY_CATEGORIES`) are read by the core crate's
    /// `CatalogConfig::from_env`.
    pub fn from_env() -> Result<Self, AppError> {
        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8570".to_string());

        let catalog_path = std::env::var("HERB_CATALOG_PATH").ok();
        if let Some(path) = &catalog_path {
            if !std::path::Path::new(path).exists() {
                return Err(AppError::Config(format!(
                    "catalog file not found at {path}"
                )));
            }
        }

        Ok(Self {
            bind_addr,
            catalog_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Environment variables are process-global, so the scenarios run
    // sequentially in a single test body.
    #[test]
    fn from_env_defaults_overrides_and_missing_file() {
        std::env::remove_var("BIND_ADDR");
        std::env::remove_var("HERB_CATALOG_PATH");
        let config = Config::from_env().expect("defaults load");
        assert_eq!(config.bind_addr, "127.0.0.1:8570");
        assert!(config.catalog_path.is_none());

        std::env::set_var("HERB_CATALOG_PATH", "/definitely/not/here.json");
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
        assert!(err.to_string().contains("/definitely/not/here.json"));
        std::env::remove_var("HERB_CATALOG_PATH");

        std::env::set_var("BIND_ADDR", "0.0.0.0:9000");
        let config = Config::from_env().expect("override loads");
        assert_eq!(config.bind_addr, "0.0.0.0:9000");
        std::env::remove_var("BIND_ADDR");
    }
}
