use std::time::Instant;

use axum::extract::{MatchedPath, Request};
use axum::middleware::Next;
use axum::response::Response;

/// One structured event per request, keyed by the matched route so that
/// `/schemes/{key}` calls group together across schemes. Client errors log
/// at warn, server errors at error.
pub async fn request_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());
    let started = Instant::now();

    let response = next.run(req).await;

    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis() as u64;
    if status.is_server_error() {
        tracing::error!(%method, %route, %path, status = status.as_u16(), elapsed_ms, "scheme_request");
    } else if status.is_client_error() {
        tracing::warn!(%method, %route, %path, status = status.as_u16(), elapsed_ms, "scheme_request");
    } else {
        tracing::info!(%method, %route, %path, status = status.as_u16(), elapsed_ms, "scheme_request");
    }

    response
}
