//! Draft order creation for custom-priced line items.

use pricing_bridge_core::DraftOrderLine;
use tracing::{info, instrument};

use crate::error::{AppError, Result};
use crate::shopify::{
    AdminClient, CreatedDraftOrder, CustomerRef, DraftOrderInput, DraftOrderLineItem,
    LineItemProperty,
};

/// Tags applied to every draft order created by the bridge.
pub const DRAFT_ORDER_TAGS: &str = "draft-order, custom-pricing";

/// Merchant-facing note on every draft order created by the bridge.
pub const DRAFT_ORDER_NOTE: &str = "Order created via custom pricing form";

/// Build the draft order payload: one line item, quantity 1, properties as
/// custom attributes.
#[must_use]
pub fn build_draft_order(line: &DraftOrderLine) -> DraftOrderInput {
    let properties = line
        .properties
        .iter()
        .map(|(name, value)| LineItemProperty {
            name: name.to_string(),
            value: value.to_string(),
        })
        .collect();

    DraftOrderInput {
        line_items: vec![DraftOrderLineItem {
            title: line.title.clone(),
            price: line.price,
            quantity: 1,
            properties,
        }],
        customer: line
            .customer_email
            .as_ref()
            .map(|email| CustomerRef {
                email: email.clone(),
            }),
        tags: DRAFT_ORDER_TAGS.to_string(),
        note: DRAFT_ORDER_NOTE.to_string(),
    }
}

/// Create a draft order for `line`.
///
/// # Errors
///
/// Returns `AppError::Upstream` if the platform rejects the draft order, or
/// `AppError::Internal` if the request itself fails.
#[instrument(skip(client, line), fields(product_id = %line.product_id, price = %line.price))]
pub async fn create_draft_order(
    client: &AdminClient,
    line: &DraftOrderLine,
) -> Result<CreatedDraftOrder> {
    let input = build_draft_order(line);

    let created = client
        .create_draft_order(&input)
        .await
        .map_err(|e| AppError::from_shopify(e, "Failed to create draft order"))?;

    info!(
        draft_order_id = %created.draft_order.id,
        name = ?created.draft_order.name,
        "Draft order created"
    );

    Ok(created)
}
