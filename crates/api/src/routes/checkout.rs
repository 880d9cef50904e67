//! Checkout forwarding handlers.
//!
//! Both handlers check the access token first, then parse and validate the
//! body, then call the Admin API. The token check comes first so a
//! misconfigured deployment answers 500 for every request.

use axum::{Json, body::Bytes, extract::State, http::StatusCode};
use chrono::Utc;
use pricing_bridge_core::{DraftOrderId, LineItemRequest, Price, Properties, VariantId};
use serde::Serialize;
use serde_json::Value;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::services;
use crate::state::AppState;

/// Success body for `POST /create-draft-order`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftOrderCreatedResponse {
    pub success: bool,
    pub draft_order_id: DraftOrderId,
    pub invoice_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft_order_name: Option<String>,
    /// Complete draft order record as returned by the platform.
    pub data: Value,
}

/// Success body for `POST /create-variant-and-add-to-cart`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantReadyResponse {
    pub success: bool,
    pub variant_id: VariantId,
    pub variant_title: String,
    pub price: Price,
    pub properties: Properties,
    pub is_new_variant: bool,
    pub message: &'static str,
}

/// Create a draft order for a custom-priced line item.
///
/// POST /create-draft-order
#[instrument(skip(state, body))]
pub async fn create_draft_order(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<DraftOrderCreatedResponse>> {
    let client = state.admin()?;
    let line = LineItemRequest::from_slice(&body)?.validate_draft_order()?;

    let created = services::create_draft_order(client, &line).await?;

    Ok(Json(DraftOrderCreatedResponse {
        success: true,
        draft_order_id: created.draft_order.id,
        invoice_url: created.draft_order.invoice_url,
        draft_order_name: created.draft_order.name,
        data: created.raw,
    }))
}

/// Find or create a variant at the requested price, for adding to the cart.
///
/// POST /create-variant-and-add-to-cart
#[instrument(skip(state, body))]
pub async fn create_variant_and_add_to_cart(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<VariantReadyResponse>> {
    let client = state.admin()?;
    let line = LineItemRequest::from_slice(&body)?.validate_variant()?;

    let resolution = services::find_or_create_price_variant(
        client,
        &line,
        Utc::now(),
        state.config().unique_variant_titles,
    )
    .await?;

    let message = if resolution.is_new {
        "Variant created successfully"
    } else {
        "Existing variant reused"
    };

    Ok(Json(VariantReadyResponse {
        success: true,
        variant_id: resolution.variant.id,
        variant_title: resolution.title,
        price: line.price,
        properties: line.properties,
        is_new_variant: resolution.is_new,
        message,
    }))
}

/// CORS preflight: 200 with an empty body (headers come from middleware).
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// Any method other than POST or OPTIONS.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
