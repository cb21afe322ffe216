pub mod core;
pub(crate) mod routes;
pub(crate) mod types;
pub(crate) mod utils;

use axum::Router;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::core::error::ConfigError as Error;
use crate::core::{config::Args, state::AppState};

/// Builds the router from environment configuration, without binding a
/// listener. Integration tests drive the returned router in-process.
pub async fn app() -> Result<Router, Error> {
    let config = Args::from_env()?;

    let state = AppState::new(&config)?;

    Ok(routes::router::routes(state))
}

pub async fn run() -> Result<(), Error> {
    let config = Args::from_env()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_new(&config.log_level).unwrap_or_default())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let state = AppState::new(&config)?;

    let app = routes::router::routes(state);

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port))
        .await
        .map_err(Error::IO)?;

    tracing::debug!("listening on {}:{}", config.host, config.port);

    axum::serve(listener, app).await.map_err(Error::IO)?;

    Ok(())
}
