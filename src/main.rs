use std::net::SocketAddr;

use anyhow::Context;
use axum::Router;
use tracing::{error, info, warn};

use cybernet_chat::{
    config::{Config, RunMode},
    logger, routes, serverless,
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logger::init("info");

    let config = Config::from_env().context("invalid configuration")?;
    if config.credential.is_none() {
        warn!("no upstream API key set; /api/chat will answer 500 until one is configured");
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let mode = config.mode;
    let static_dir = config.static_dir.clone();
    let state = AppState::shared(config);

    let app: Router = match mode {
        RunMode::Development => routes::create_router(&static_dir).with_state(state),
        RunMode::Production => serverless::app(state),
    };

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    info!("Server running on port {}", addr.port());
    match mode {
        RunMode::Development => info!(
            "Secure API proxy ready. Front end should call {} instead of the upstream API directly.",
            routes::CHAT_PATH
        ),
        RunMode::Production => info!("Serving the single chat handler"),
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
                info!("Received SIGTERM, shutting down");
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
