// HTTP middleware

use crate::server::observability::{generate_request_id, RequestId, REQUEST_ID_HEADER};
use crate::server::ServerState;
use axum::{
    body::Body,
    extract::{Request, State},
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use std::time::Instant;

/// Request tracing middleware: assigns a request id and records request counters
pub async fn trace_request_mw(
    State(state): State<ServerState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .unwrap_or_else(generate_request_id);
    request.extensions_mut().insert(RequestId(request_id.clone()));

    state.metrics.inc_requests_total();
    state.metrics.inc_requests_in_flight();

    tracing::debug!(request_id = %request_id, "→ {} {}", method, uri);

    let mut response = next.run(request).await;

    let duration = start.elapsed();
    let status = response.status();

    state.metrics.dec_requests_in_flight();
    state.metrics.record_request_duration(duration.as_millis() as u64);

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    tracing::debug!(
        request_id = %request_id,
        "← {} {} {} ({:?})",
        method,
        uri,
        status.as_u16(),
        duration
    );

    response
}
