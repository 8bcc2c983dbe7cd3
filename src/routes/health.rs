//! Health check endpoint

use axum::{extract::State, Json};
use serde::Serialize;

use crate::convert::MarkdownConverter;
use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub backend: &'static str,
}

pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        backend: state.converter().kind().as_str(),
    })
}
