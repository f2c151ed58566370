mod config;
mod error;
mod server;

use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use herb_catalog::CatalogConfig;

use config::Config;
use server::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    info!("starting herb-catalog server");

    let config = Config::from_env()?;
    let catalog_config = CatalogConfig::from_env()?;
    info!(
        bind_addr = %config.bind_addr,
        catalog = config.catalog_path.as_deref().unwrap_or("<embedded>"),
        mode = ?catalog_config.mode,
        "configuration loaded"
    );

    // The catalog is loaded exactly once; everything after this point is
    // read-only and shared without locking.
    let (store, report) = match &config.catalog_path {
        Some(path) => herb_catalog::load_path(path, &catalog_config)?,
        None => herb_catalog::builtin(&catalog_config)?,
    };

    if report.is_clean() {
        info!("catalog loaded with a clean report");
    } else {
        // Serve whatever the lenient load produced; callers can inspect
        // the details at GET /report.
        warn!(
            violations = report.violations.len(),
            duplicates = report.duplicates.len(),
            warnings = report.warnings.len(),
            "catalog loaded with findings"
        );
    }

    let app = server::router(Arc::new(AppState { store, report }));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!(addr = %config.bind_addr, "listening");
    axum::serve(listener, app).await?;

    info!("server shut down");
    Ok(())
}
