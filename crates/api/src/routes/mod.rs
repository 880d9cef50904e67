//! HTTP route handlers for the bridge.
//!
//! # Route Structure
//!
//! ```text
//! GET     /health                          - Liveness check
//!
//! # Checkout forwarding (CORS-enabled)
//! POST    /create-draft-order              - Create a draft order, return its invoice URL
//! POST    /create-variant-and-add-to-cart  - Find or create a price variant
//! OPTIONS (both paths)                     - CORS preflight, empty 200
//! *       (both paths)                     - 405 Method not allowed
//! ```

pub mod checkout;

use std::any::Any;

use axum::{
    Router,
    http::{Request, Response as HttpResponse},
    middleware::{from_fn, from_fn_with_state},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    trace::{DefaultOnResponse, OnResponse, TraceLayer},
};
use tracing::Span;

use crate::error::AppError;
use crate::middleware::{cors_headers_middleware, request_id_middleware};
use crate::state::AppState;

/// Create the checkout forwarding routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/create-draft-order",
            post(checkout::create_draft_order)
                .options(checkout::preflight)
                .fallback(checkout::method_not_allowed),
        )
        .route(
            "/create-variant-and-add-to-cart",
            post(checkout::create_variant_and_add_to_cart)
                .options(checkout::preflight)
                .fallback(checkout::method_not_allowed),
        )
}

/// Build the complete application with middleware and state.
///
/// Sentry layers are added by the binary on top of this router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(routes())
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(from_fn_with_state(state.clone(), cors_headers_middleware))
        .layer(from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = tracing::field::Empty,
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &HttpResponse<_>, latency: std::time::Duration, span: &Span| {
                        span.record("status", response.status().as_u16());
                        span.record(
                            "latency_ms",
                            u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                        );
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check the Admin API.
async fn health() -> &'static str {
    "ok"
}

/// Convert a handler panic into the standard server-error body.
fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let details = panic
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| panic.downcast_ref::<&str>().map(|s| (*s).to_string()))
        .unwrap_or_else(|| "handler panicked".to_string());

    AppError::Internal(details).into_response()
}
