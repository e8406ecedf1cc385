//! Handler for recipient registration.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{Method, StatusCode};
use axum::response::IntoResponse;
use hamo_core::error::CoreError;
use hamo_core::validation::validate_request;
use hamo_db::models::RecipientRequest;

use crate::error::{AppError, AppResult};
use crate::response::{MessageResponse, Utf8Json};
use crate::state::AppState;

/// POST /api/recipient
///
/// Register an email address against a theme. The body is decoded as JSON
/// whatever its declared content type; only the first JSON value is read and
/// anything after it is ignored. Store failures are logged and
/// reported to the client without detail.
pub async fn add_recipient(
    State(state): State<AppState>,
    method: Method,
    body: Bytes,
) -> AppResult<impl IntoResponse> {
    if method != Method::POST {
        return Err(CoreError::MethodNotAllowed(format!(
            "{method} is not allowed, use POST"
        ))
        .into());
    }

    let input = decode_first(&body)
        .map_err(|e| AppError::BadRequest(format!("Invalid JSON body: {e}")))?;
    validate_request(&input)?;

    state.store.add_recipient(&input).await?;

    tracing::info!(theme_id = %input.theme_id, "Recipient registered");

    Ok((
        StatusCode::CREATED,
        Utf8Json(MessageResponse { message: "success" }),
    ))
}

/// Decode the first JSON value in `body`. An empty body is an EOF error.
fn decode_first(body: &[u8]) -> Result<RecipientRequest, serde_json::Error> {
    match serde_json::Deserializer::from_slice(body)
        .into_iter::<RecipientRequest>()
        .next()
    {
        Some(result) => result,
        None => serde_json::from_slice(body),
    }
}
