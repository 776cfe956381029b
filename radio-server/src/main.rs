use std::process::ExitCode;

use radio_server::config::AppConfig;
use radio_server::directory::Directory;
use radio_server::mirror::MirrorClient;
use radio_server::web::{AppState, create_router};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("invalid configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mirrors = match MirrorClient::new(config.mirrors) {
        Ok(client) => client,
        Err(e) => {
            error!("failed to create mirror client: {e}");
            return ExitCode::FAILURE;
        }
    };
    for mirror in mirrors.mirrors() {
        info!(mirror = %mirror, tier = %mirror.tier(), "configured mirror");
    }

    let state = AppState::new(Directory::new(mirrors));
    let app = create_router(state);

    let listener = match tokio::net::TcpListener::bind(config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("failed to bind {}: {e}", config.bind_addr);
            return ExitCode::FAILURE;
        }
    };

    info!("Radio directory listening on http://{}", config.bind_addr);
    info!("API Endpoints:");
    info!("  GET  /api/radio/stations/popular       - Most-voted stations");
    info!("  GET  /api/radio/stations/search        - Search by name/country");
    info!("  GET  /api/radio/countries              - Countries with station counts");
    info!("  POST /api/radio/stations/:uuid/click   - Register a station click");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("server error: {e}");
        return ExitCode::FAILURE;
    }

    info!("shut down");
    ExitCode::SUCCESS
}

/// Resolve on Ctrl-C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}
