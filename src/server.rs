//! HTTP server lifecycle.

use tokio::net::TcpListener;
use tracing::info;

use crate::api::{create_router, AppState};
use crate::config::Config;
use crate::error::Result;
use crate::metrics;
use crate::utils::shutdown_signal;

/// Validate `config`, bind the listener and serve until a shutdown signal arrives.
pub async fn run(config: Config) -> Result<()> {
    config.validate()?;

    metrics::init_metrics();
    if let Some(addr) = config.metrics_addr()? {
        metrics::install_exporter(addr)?;
    }

    let addr = config.bind_addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!("HTTP server listening on http://{}", addr);
    info!("API docs: http://{}/docs", addr);

    axum::serve(listener, create_router(AppState::new()))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}
