//! Shared response types for API handlers.
//!
//! Exhibit listings are returned as bare JSON arrays (no envelope) with an
//! explicit UTF-8 charset.

use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderValue;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::error::AppError;

const JSON_UTF8: &str = "application/json; charset=utf-8";

/// JSON body declared as `application/json; charset=utf-8`.
///
/// # Example
///
/// ```ignore
/// Ok(Utf8Json(themes))
/// ```
#[derive(Debug)]
pub struct Utf8Json<T>(pub T);

impl<T: Serialize> IntoResponse for Utf8Json<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec(&self.0) {
            Ok(bytes) => (
                [(CONTENT_TYPE, HeaderValue::from_static(JSON_UTF8))],
                bytes,
            )
                .into_response(),
            Err(err) => {
                AppError::InternalError(format!("failed to serialize response: {err}"))
                    .into_response()
            }
        }
    }
}

/// Fixed acknowledgement body, e.g. `{"message":"success"}`.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
