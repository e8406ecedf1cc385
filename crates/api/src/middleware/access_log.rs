//! Access log middleware.

use std::net::SocketAddr;
use std::time::Instant;

use axum::extract::{ConnectInfo, Request};
use axum::middleware::Next;
use axum::response::Response;

/// Log every request once it has been answered.
///
/// Install with `axum::middleware::from_fn(access_log)`.
pub async fn access_log(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let client_ip = client_ip(&request);
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    let response = next.run(request).await;

    tracing::info!(
        client_ip = %client_ip,
        %method,
        %path,
        status = response.status().as_u16(),
        latency_ms = start.elapsed().as_millis() as u64,
        "Request completed",
    );

    response
}

/// Client address as seen by the service.
///
/// `X-Forwarded-For` wins when a proxy set it; otherwise the peer address
/// recorded by `into_make_service_with_connect_info`.
fn client_ip(request: &Request) -> String {
    request
        .headers()
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
        .or_else(|| {
            request
                .extensions()
                .get::<ConnectInfo<SocketAddr>>()
                .map(|ConnectInfo(addr)| addr.to_string())
        })
        .unwrap_or_else(|| "unknown".to_string())
}
