use axum::Router;
use tokio::net::TcpListener;

use crate::model::{ModelManager, Store};
use crate::utils::signal::shutdown_signal;
use crate::{error::AppResult, web::AppState};

pub mod config;
pub use config::{Config, ConfigError, ConfigResult};

pub mod error;
pub mod model;
pub mod utils;
pub mod validation;
pub mod web;

pub static APPLICATION_NAME: &str = "coursehub";

pub async fn build_server() -> AppResult<(AppState, Router)> {
    let use_local = cfg!(debug_assertions);
    let config = Config::get_or_init(use_local).await;

    let store = if config.app().seed() {
        tracing::debug!("seeding catalog...");
        Store::seeded()?
    } else {
        Store::new()
    };

    build_server_with_store(ModelManager::new(store), config)
}

/// Wires an existing store into the router. Used by tests to start from a known state.
pub fn build_server_with_store(
    mm: ModelManager,
    config: &Config,
) -> AppResult<(AppState, Router)> {
    let state = AppState::new(mm);
    let app = web::routes::build_app(state.clone(), config);
    Ok((state, app))
}

#[tracing::instrument]
pub async fn setup_workers() -> AppResult<()> {
    let (_, app) = build_server().await?;
    let config = Config::get_or_init(cfg!(debug_assertions)).await;
    let listener = TcpListener::bind(config.host().bindto()).await?;

    tracing::info!("axum is starting at: {}", config.host().bindto());
    if config.app().docs() {
        tracing::info!("api docs served at /api/docs");
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped.");
    Ok(())
}

fn setup_trace() {
    use tracing_error::ErrorLayer;
    use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

    // load .env file for RUST_LOG etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .with(ErrorLayer::default())
        .init();

    tracing::debug!("tracing initialized.");
}

#[tracing::instrument]
pub async fn run() -> AppResult<()> {
    setup_trace();
    tracing::info!("starting {APPLICATION_NAME}");
    setup_workers().await?;
    Ok(())
}
