use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::repositories::submission_repository::RepositoryError;

/// Error returned from API handlers, rendered as `{"error": "..."}`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{}", .0.body_text())]
    InvalidBody(#[from] JsonRejection),
    #[error(transparent)]
    Storage(#[from] RepositoryError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::InvalidBody(rejection) => rejection.status(),
            AppError::Storage(RepositoryError::Full { .. }) => StatusCode::INSUFFICIENT_STORAGE,
        };
        tracing::warn!(%status, "Request failed: {}", self);
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
