//! course_catalog_server: standalone REST server for the course catalog.
//!
//! Reads config from env vars (a `.env` file is honoured):
//!   COURSE_CATALOG_CONFIG       optional YAML config file
//!   COURSE_CATALOG_BIND_ADDR    listen address (default: 0.0.0.0:8000)
//!   COURSE_CATALOG_DATA_DIR     directory holding the CSV datasets
//!   COURSE_CATALOG_OPEN_BROWSER open course pages on lookup (default: true)

use std::sync::Arc;

use anyhow::Context;
use course_catalog_core::{CatalogConfig, CatalogService, DatasetStore};
use course_catalog_server::router::build_router;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "course_catalog_server=info,course_catalog_core=info,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = CatalogConfig::load().context("failed to load configuration")?;

    // Every dataset must load before we accept traffic.
    let store = match DatasetStore::load(&config.datasets) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            tracing::error!(error = %e, "Error loading datasets");
            return Err(e).context("one or more datasets are missing");
        }
    };
    tracing::info!(
        browser_enabled = config.browser.enabled,
        fail_on_launch_error = config.browser.fail_on_error,
        "Datasets loaded successfully"
    );

    let service = Arc::new(CatalogService::from_config(store, config.browser));
    let app = build_router(service);

    let bind_addr = &config.server.bind_addr;
    let listener = TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("failed to bind to {bind_addr}"))?;
    tracing::info!("course_catalog_server listening on {bind_addr}");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
