//! Server startup: validate config, build the router, serve until shutdown.

use std::future::Future;

use tokio::net::TcpListener;
use tracing::info;

use crate::api::{create_router, AppState};
use crate::config::Config;
use crate::error::{AppError, Result};

/// Serve the application until `shutdown` resolves.
pub async fn run<F>(config: Config, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    config.validate().map_err(AppError::InvalidConfig)?;

    info!("Cat facts API: {}", config.cat_facts_api_url);
    info!("Dog image API: {}", config.dog_api_url);
    info!("Request timeout: {}ms", config.http_timeout_ms);

    let state = AppState::from_config(&config)?;
    let router = create_router(state);

    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr).await?;
    info!("HTTP server listening on {}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("Server stopped");
    Ok(())
}
