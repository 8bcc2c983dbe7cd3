//! Pagemill Server
//!
//! A self-hosted service that converts uploaded PDF documents to Markdown.

use std::net::SocketAddr;

use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pagemill_server::config::Config;
use pagemill_server::convert::{select_converter, MarkdownConverter};
use pagemill_server::state::AppState;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pagemill_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    tracing::info!("Starting Pagemill Server v{}", env!("CARGO_PKG_VERSION"));

    // Pick the conversion backend once for the process lifetime
    let converter = select_converter(&config.conversion);
    tracing::info!("Conversion backend: {}", converter.kind());

    let ip = config
        .server
        .host
        .parse()
        .expect("SERVER_HOST is not a valid IP address");
    let addr = SocketAddr::new(ip, config.server.port);

    let state = AppState::new(config, converter);
    let app = pagemill_server::app(state);

    tracing::info!("Pagemill Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    tracing::info!("Server shutdown complete");
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown...");
        },
    }
}
