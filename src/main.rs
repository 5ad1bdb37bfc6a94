use tracing::{info, warn};

mod catalog;
mod config;
mod error;
mod handlers;
mod models;
mod routes;

use crate::catalog::CatalogStore;
use crate::config::Config;

/// Shared application state. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogStore,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,catalog_service=debug")),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    let state = AppState {
        catalog: CatalogStore::new(config.data_file.clone()),
    };

    // The file is read per request; a missing one only fails those requests.
    if tokio::fs::metadata(state.catalog.path()).await.is_err() {
        warn!(path = %state.catalog.path().display(), "Catalog file not found, product routes will return 500");
    } else {
        info!(path = %state.catalog.path().display(), "Serving catalog");
    }

    let app = routes::build_router(state, &config);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
