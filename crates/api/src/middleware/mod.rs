//! HTTP middleware stack for the bridge.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, added in `main`)
//! 2. `TraceLayer` (request tracing)
//! 3. Request ID (add unique ID to each request)
//! 4. CORS headers (on every response, including errors and preflights)

pub mod cors;
pub mod request_id;

pub use cors::{ALLOWED_HEADERS, ALLOWED_METHODS, cors_headers_middleware};
pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
