//! Preflight routing for the CORS layer.
//!
//! `tower_http::cors::CorsLayer` answers every `OPTIONS` request on its own.
//! Only real preflights (`OPTIONS` carrying `Access-Control-Request-Method`)
//! should stop there; any other `OPTIONS` request is an ordinary request and
//! must reach its handler.

use axum::extract::{Request, State};
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_REQUEST_METHOD,
    ORIGIN, VARY,
};
use axum::http::{HeaderValue, Method};
use axum::middleware::Next;
use axum::response::Response;
use axum::Router;
use tower::ServiceExt;

/// `true` for a CORS preflight request.
pub fn is_preflight(request: &Request) -> bool {
    request.method() == Method::OPTIONS
        && request.headers().contains_key(ACCESS_CONTROL_REQUEST_METHOD)
}

/// Send non-preflight `OPTIONS` requests to `inner`, the application
/// without the CORS layer. Everything else continues down the stack.
///
/// Install with `axum::middleware::from_fn_with_state(inner, route_preflight)`
/// outside the `CorsLayer`.
pub async fn route_preflight(
    State(inner): State<Router>,
    request: Request,
    next: Next,
) -> Response {
    if request.method() != Method::OPTIONS || is_preflight(&request) {
        return next.run(request).await;
    }

    let origin = request.headers().get(ORIGIN).cloned();
    let mut response = match inner.oneshot(request).await {
        Ok(response) => response,
        Err(never) => match never {},
    };

    // Same headers the CORS layer puts on an actual request.
    if let Some(origin) = origin {
        let headers = response.headers_mut();
        headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, origin);
        headers.insert(ACCESS_CONTROL_ALLOW_CREDENTIALS, HeaderValue::from_static("true"));
        headers.append(VARY, HeaderValue::from_static("origin"));
    }

    response
}
