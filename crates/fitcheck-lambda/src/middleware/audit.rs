use std::time::Instant;

use axum::extract::{MatchedPath, Request};
use axum::middleware::Next;
use axum::response::Response;

/// Emits one `api_request` event per request with the matched route
/// template, status and latency. Bodies are never logged: they carry
/// subject names and measurements.
///
/// Failed requests (4xx/5xx) are logged at `warn`, everything else at `info`.
pub async fn audit_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| "<unmatched>".to_owned());
    let started = Instant::now();

    let response = next.run(req).await;

    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis() as u64;
    if status.is_client_error() || status.is_server_error() {
        tracing::warn!(%method, %route, status = status.as_u16(), elapsed_ms, "api_request");
    } else {
        tracing::info!(%method, %route, status = status.as_u16(), elapsed_ms, "api_request");
    }

    response
}
