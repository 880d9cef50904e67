//! CORS headers for the storefront checkout form.
//!
//! The form posts cross-origin from the shop domain, so every response
//! (success, error, or preflight) carries the same three headers.

use axum::{
    extract::{Request, State},
    http::{
        HeaderValue,
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN,
        },
    },
    middleware::Next,
    response::Response,
};

use crate::state::AppState;

/// Methods the forwarding routes accept.
pub const ALLOWED_METHODS: &str = "POST, OPTIONS";

/// Request headers the browser may send.
pub const ALLOWED_HEADERS: &str = "Content-Type";

/// Add CORS headers to all responses.
///
/// Headers applied:
/// - `Access-Control-Allow-Origin: <BRIDGE_CORS_ORIGIN>` (falls back to `*` if unusable)
/// - `Access-Control-Allow-Methods: POST, OPTIONS`
/// - `Access-Control-Allow-Headers: Content-Type`
pub async fn cors_headers_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    let origin = HeaderValue::from_str(&state.config().cors_origin)
        .unwrap_or_else(|_| HeaderValue::from_static("*"));
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, origin);
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOWED_METHODS),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOWED_HEADERS),
    );

    response
}
