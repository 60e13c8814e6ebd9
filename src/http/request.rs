//! Request identification.
//!
//! # Responsibilities
//! - Pick a request ID: the client's `x-request-id`, or a fresh UUID v4
//! - Attach it to the request's tracing span
//!
//! # Design Decisions
//! - The ID lives in the span only; delegated requests and store responses
//!   keep exactly the headers they had

use axum::http::Request;
use tracing::Span;
use uuid::Uuid;

/// Header a client may use to supply its own request ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// The client-supplied request ID, or a new UUID v4.
pub fn request_id<B>(request: &Request<B>) -> String {
    request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}

/// Span for one request, used by the `TraceLayer`.
pub fn make_request_span<B>(request: &Request<B>) -> Span {
    tracing::info_span!(
        "request",
        request_id = %request_id(request),
        method = %request.method(),
        uri = %request.uri(),
        version = ?request.version(),
    )
}
