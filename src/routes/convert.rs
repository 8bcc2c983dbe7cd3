//! Conversion route.
//!
//! `POST /convert/` accepts a multipart form with a `file` field carrying a
//! PDF and responds with the extracted Markdown.

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::convert::{convert_upload, ConvertError};
use crate::state::AppState;

/// Success response body.
#[derive(Serialize)]
pub struct ConversionResponse {
    pub markdown: String,
    pub filename: String,
}

/// 400 body. The `detail` key is what clients of this service expect for
/// validation failures; 500s use the `error` key instead.
#[derive(Serialize)]
struct DetailBody {
    detail: String,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ConvertError {
    fn into_response(self) -> Response {
        if self.is_client_error() {
            let body = Json(DetailBody {
                detail: self.to_string(),
            });
            (StatusCode::BAD_REQUEST, body).into_response()
        } else {
            tracing::error!("conversion failed: {self}");
            let body = Json(ErrorBody {
                error: self.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
        }
    }
}

/// POST /convert/
///
/// Reads the `file` field, spools it, and runs the blocking conversion on
/// the blocking thread pool.
pub async fn convert_document(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ConversionResponse>, ConvertError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ConvertError::Upload(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ConvertError::Upload(e.to_string()))?;

        tracing::debug!(filename = %filename, size = bytes.len(), "received upload");

        let converter = state.converter();
        let scratch = state.scratch().clone();
        let conversion = tokio::task::spawn_blocking(move || {
            convert_upload(converter.as_ref(), &scratch, &filename, &bytes)
        })
        .await
        .map_err(|e| ConvertError::Internal(format!("conversion task failed: {e}")))??;

        return Ok(Json(ConversionResponse {
            markdown: conversion.markdown,
            filename: conversion.filename,
        }));
    }

    Err(ConvertError::MissingFile)
}
