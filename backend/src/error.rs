use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use portfolio_shared::{ContactRejected, FailureResponse, FieldError};

use crate::repositories::contact_store::StoreError;

pub const GENERIC_FAILURE: &str = "Failed to send message";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Field-level problems, reported to the caller as they are.
    #[error("validation failed for {} field(s)", .0.len())]
    Validation(Vec<FieldError>),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("{0}")]
    Unexpected(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(ContactRejected::new(errors))).into_response()
            }
            AppError::Store(e) => {
                tracing::error!("Contact intake failed: {}", e);
                sentry::capture_error(&e);
                internal_error()
            }
            AppError::Unexpected(detail) => {
                tracing::error!("Contact intake failed: {}", detail);
                sentry::capture_message(&detail, sentry::Level::Error);
                internal_error()
            }
        }
    }
}

pub fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(FailureResponse::new(GENERIC_FAILURE)),
    )
        .into_response()
}

/// Used by `CatchPanicLayer` so a panicking handler still answers with the
/// generic 500 body.
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    tracing::error!("Handler panicked: {}", detail);
    internal_error()
}
