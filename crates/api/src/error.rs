//! Unified error handling with Sentry integration.
//!
//! Every handler returns `Result<T, AppError>`. Errors render as the JSON
//! error object the checkout form expects:
//!
//! ```json
//! { "success": false, "error": "Missing data", "details": "..." }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use pricing_bridge_core::ValidationError;
use serde_json::{Value, json};
use thiserror::Error;

use crate::shopify::ShopifyError;

/// Application-level error type for the bridge.
#[derive(Debug, Error)]
pub enum AppError {
    /// Inbound payload is missing required fields or is malformed.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Server is missing required configuration.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Admin API answered with a non-success status.
    #[error("{message}: upstream status {status}")]
    Upstream {
        message: &'static str,
        status: StatusCode,
        body: Value,
    },

    /// Any other failure.
    #[error("Internal error: {0}")]
    Internal(String),

    /// HTTP method not supported on this route.
    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl AppError {
    /// Map an Admin API failure, labelling upstream rejections with `message`.
    ///
    /// Upstream statuses that are not valid HTTP codes collapse to 502.
    #[must_use]
    pub fn from_shopify(err: ShopifyError, message: &'static str) -> Self {
        match err {
            ShopifyError::Api { status, body } => Self::Upstream {
                message,
                status: StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                body,
            },
            other => Self::Internal(other.to_string()),
        }
    }

    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Configuration(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Upstream { status, .. } => *status,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server-side failures to Sentry
        if matches!(
            self,
            Self::Configuration(_) | Self::Upstream { .. } | Self::Internal(_)
        ) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }

        let status = self.status();
        let body = match self {
            Self::Validation(err) => json!({
                "success": false,
                "error": "Missing data",
                "details": err.to_string(),
            }),
            Self::Configuration(details) => json!({
                "success": false,
                "error": "Server misconfigured",
                "details": details,
            }),
            Self::Upstream { message, body, .. } => json!({
                "success": false,
                "error": message,
                "details": body,
            }),
            Self::Internal(details) => json!({
                "success": false,
                "error": "Server error",
                "details": details,
            }),
            Self::MethodNotAllowed => json!({ "error": "Method not allowed" }),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
