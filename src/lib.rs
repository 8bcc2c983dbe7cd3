//! Pagemill Server
//!
//! Converts uploaded PDF documents to Markdown over HTTP. This library crate
//! exposes the modules and the router builder so integration tests can run
//! the service in-process; the server binary is in main.rs.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod convert;
pub mod routes;
pub mod scratch;
pub mod state;

use state::AppState;

/// Build the application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let static_dir = state.config().server.static_dir.clone();
    let max_upload = state.config().server.max_upload_bytes;

    Router::new()
        .route("/", get(routes::pages::landing))
        .route("/health", get(routes::health::health_check))
        .route("/convert", post(routes::convert::convert_document))
        .route("/convert/", post(routes::convert::convert_document))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(DefaultBodyLimit::max(max_upload))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
