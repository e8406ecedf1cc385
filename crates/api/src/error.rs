use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use hamo_core::error::CoreError;
use hamo_db::StoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `hamo_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A request body or query string that could not be decoded.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A store failure on a read endpoint. The underlying failure text is
    /// returned to the client.
    #[error("{what}: {source}")]
    Query {
        what: &'static str,
        source: StoreError,
    },

    /// A store failure on a write endpoint. Logged, never shown to clients.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Adapter for `map_err` on read paths.
    pub fn query(what: &'static str) -> impl FnOnce(StoreError) -> Self {
        move |source| AppError::Query { what, source }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::MethodNotAllowed(msg) => (
                    StatusCode::METHOD_NOT_ALLOWED,
                    "METHOD_NOT_ALLOWED",
                    msg.clone(),
                ),
            },

            // --- Store errors ---
            AppError::Query { what, source } => {
                tracing::error!(error = %source, "{what}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORE_ERROR",
                    format!("{what}: {source}"),
                )
            }
            AppError::Store(err) => {
                tracing::error!(error = %err, "Store write failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
