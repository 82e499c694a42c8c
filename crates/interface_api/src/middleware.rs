//! API middleware

use axum::{
    body::Body,
    http::{HeaderName, HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use chrono::Utc;
use tracing::info;

use core_kernel::TraceId;

/// Response header carrying the request's trace id
pub const TRACE_ID_HEADER: HeaderName = HeaderName::from_static("x-trace-id");

/// Request logging middleware
///
/// Assigns a fresh [`TraceId`] to every request, makes it available to
/// handlers as an extension, echoes it in the `x-trace-id` response header
/// and logs one line per request.
pub async fn request_logging_middleware(
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let trace_id = TraceId::generate();
    request.extensions_mut().insert(trace_id);

    let method = request.method().clone();
    let uri = request.uri().clone();

    let start = Utc::now();

    let mut response = next.run(request).await;

    let duration = Utc::now() - start;
    let status = response.status();

    if let Ok(value) = HeaderValue::from_str(&trace_id.to_string()) {
        response.headers_mut().insert(TRACE_ID_HEADER, value);
    }

    info!(
        %trace_id,
        method = %method,
        uri = %uri,
        status = %status.as_u16(),
        duration_ms = duration.num_milliseconds(),
        "API request"
    );

    response
}
