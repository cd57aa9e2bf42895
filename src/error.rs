//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

pub const VALIDATION_MESSAGE: &str = "title and body are required";
pub const NOT_FOUND_MESSAGE: &str = "Item not found";
pub const PAYLOAD_TOO_LARGE_MESSAGE: &str = "request entity too large";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
}

/// Failure reported by the data-access layer.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database: {0}")]
    Database(#[from] sqlx::Error),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Store operation a failure happened in; selects the client-facing 500 message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreAction {
    Fetch,
    Add,
    Update,
    Delete,
}

impl StoreAction {
    pub fn message(self) -> &'static str {
        match self {
            StoreAction::Fetch => "An error occurred while fetching items",
            StoreAction::Add => "An error occurred while adding the item",
            StoreAction::Update => "An error occurred while updating the item",
            StoreAction::Delete => "An error occurred while deleting the item",
        }
    }

    fn log_label(self) -> &'static str {
        match self {
            StoreAction::Fetch => "fetching items",
            StoreAction::Add => "adding item",
            StoreAction::Update => "updating item",
            StoreAction::Delete => "deleting item",
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{}", VALIDATION_MESSAGE)]
    Validation,
    #[error("{}", NOT_FOUND_MESSAGE)]
    NotFound,
    /// The request body could not be read in full, e.g. it ran past the body limit.
    #[error("{}", PAYLOAD_TOO_LARGE_MESSAGE)]
    PayloadTooLarge,
    #[error("{}", .action.message())]
    Store {
        action: StoreAction,
        #[source]
        source: StoreError,
    },
}

impl AppError {
    /// Wraps a store failure with the operation it interrupted.
    pub fn store(action: StoreAction) -> impl FnOnce(StoreError) -> AppError {
        move |source| AppError::Store { action, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Store { action, source } = &self {
            tracing::error!(error = %source, "error {}", action.log_label());
        }
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(err: AppError) -> (StatusCode, serde_json::Value) {
        let resp = err.into_response();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn validation_maps_to_400() {
        let (status, body) = body_json(AppError::Validation).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, serde_json::json!({ "error": "title and body are required" }));
    }

    #[tokio::test]
    async fn not_found_maps_to_404() {
        let (status, body) = body_json(AppError::NotFound).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Item not found");
    }

    #[tokio::test]
    async fn payload_too_large_maps_to_413() {
        let (status, body) = body_json(AppError::PayloadTooLarge).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body["error"], "request entity too large");
    }

    #[tokio::test]
    async fn store_error_hides_detail() {
        let err = AppError::store(StoreAction::Update)(StoreError::Unavailable("socket closed".into()));
        let (status, body) = body_json(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "An error occurred while updating the item");
        assert!(!body.to_string().contains("socket closed"));
    }
}
