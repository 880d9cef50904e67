//! Shopify Admin REST API client.
//!
//! The bridge only needs three endpoints, so it talks REST with `reqwest`
//! directly rather than pulling in a generated client.
//!
//! # API Reference
//!
//! - Base URL: `https://{store}/admin/api/{version}`
//! - Authentication: `X-Shopify-Access-Token: <token>`
//! - `POST draft_orders.json`
//! - `GET products/{id}/variants.json?limit=250`
//! - `POST products/{id}/variants.json`

mod client;
pub mod types;

pub use client::{AdminClient, VARIANT_PAGE_LIMIT};
pub use types::*;

use serde_json::Value;
use thiserror::Error;

/// Errors that can occur when calling the Admin API.
#[derive(Debug, Error)]
pub enum ShopifyError {
    /// HTTP request failed before a response arrived.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API answered with a non-success status.
    #[error("API error: {status} - {body}")]
    Api { status: u16, body: Value },

    /// Success response could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Access token contains characters not allowed in a header.
    #[error("Invalid access token: {0}")]
    InvalidToken(String),
}
