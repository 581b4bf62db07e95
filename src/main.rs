mod api_doc;
mod app;
mod config;
mod error;
mod handlers;
mod models;
mod routes;
mod state;
mod storage;
mod validation;

use anyhow::Context;
use config::Config;
use state::AppState;
use storage::JsonFileStore;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("shopping-list-api starting");

    let config = Config::from_env()?;
    config.log_startup();

    let state = AppState::new(JsonFileStore::new(&config.data_path));
    let app = app::build_router(state, config.enable_api_docs);

    let listener = tokio::net::TcpListener::bind(config.bind_address())
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_address()))?;

    tracing::info!("Server running on {}", config.bind_address());
    axum::serve(listener, app)
        .await
        .context("Server error")?;

    Ok(())
}
