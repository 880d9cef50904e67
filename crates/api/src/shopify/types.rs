//! Admin REST API request and response shapes.
//!
//! Only the fields the bridge reads or writes are modelled. Draft orders are
//! also kept as raw JSON so the full record can be echoed to the caller.

use pricing_bridge_core::{DraftOrderId, Price, ProductId, VariantId};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// =============================================================================
// Draft Orders
// =============================================================================

/// Body of `POST draft_orders.json`.
#[derive(Debug, Clone, Serialize)]
pub struct DraftOrderInput {
    pub line_items: Vec<DraftOrderLineItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<CustomerRef>,
    pub tags: String,
    pub note: String,
}

/// A custom (non-catalog) line item priced by the caller.
#[derive(Debug, Clone, Serialize)]
pub struct DraftOrderLineItem {
    pub title: String,
    pub price: Price,
    pub quantity: u32,
    /// Custom attributes under their REST name (`custom_attributes` with
    /// `key` is the GraphQL `DraftOrderInput` spelling).
    pub properties: Vec<LineItemProperty>,
}

/// A custom attribute on a line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItemProperty {
    pub name: String,
    pub value: String,
}

/// Customer reference by email.
#[derive(Debug, Clone, Serialize)]
pub struct CustomerRef {
    pub email: String,
}

/// Fields read back from a created draft order.
#[derive(Debug, Clone, Deserialize)]
pub struct DraftOrder {
    pub id: DraftOrderId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub invoice_url: Option<String>,
}

/// A created draft order with its complete JSON record.
#[derive(Debug, Clone)]
pub struct CreatedDraftOrder {
    pub draft_order: DraftOrder,
    pub raw: Value,
}

// =============================================================================
// Variants
// =============================================================================

/// Body of `POST products/{id}/variants.json`.
#[derive(Debug, Clone, Serialize)]
pub struct VariantInput {
    pub product_id: ProductId,
    pub option1: String,
    pub price: Price,
    pub sku: String,
    /// Always serialized; `null` disables inventory tracking.
    pub inventory_management: Option<String>,
    pub inventory_policy: String,
}

/// A product variant as listed or created.
#[derive(Debug, Clone, Deserialize)]
pub struct Variant {
    pub id: VariantId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub option1: Option<String>,
    /// Decimal string; parsed lazily so one odd variant can't fail a listing.
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub sku: Option<String>,
}

impl Variant {
    /// Parsed price, if the platform returned a valid one.
    #[must_use]
    pub fn price(&self) -> Option<Price> {
        self.price.as_deref().and_then(|p| p.parse().ok())
    }

    /// Display title, preferring the full title over the first option value.
    #[must_use]
    pub fn display_title(&self) -> String {
        self.title
            .clone()
            .or_else(|| self.option1.clone())
            .unwrap_or_default()
    }
}

// =============================================================================
// Envelopes
// =============================================================================

#[derive(Debug, Serialize)]
pub(crate) struct DraftOrderRequest<'a> {
    pub draft_order: &'a DraftOrderInput,
}

#[derive(Debug, Serialize)]
pub(crate) struct VariantRequest<'a> {
    pub variant: &'a VariantInput,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DraftOrderResponse {
    pub draft_order: Value,
}

#[derive(Debug, Deserialize)]
pub(crate) struct VariantResponse {
    pub variant: Variant,
}

#[derive(Debug, Deserialize)]
pub(crate) struct VariantsResponse {
    #[serde(default)]
    pub variants: Vec<Variant>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_variant_input_serializes_null_inventory_management() {
        let input = VariantInput {
            product_id: ProductId::new(1),
            option1: "Jazz - 150.00".to_string(),
            price: "150.00".parse().unwrap(),
            sku: "CUSTOM-1".to_string(),
            inventory_management: None,
            inventory_policy: "continue".to_string(),
        };
        let value = serde_json::to_value(VariantRequest { variant: &input }).unwrap();
        assert_eq!(
            value,
            json!({"variant": {
                "product_id": 1,
                "option1": "Jazz - 150.00",
                "price": "150.00",
                "sku": "CUSTOM-1",
                "inventory_management": null,
                "inventory_policy": "continue",
            }})
        );
    }

    #[test]
    fn test_variant_tolerates_bad_price() {
        let variant: Variant =
            serde_json::from_value(json!({"id": 5, "title": "Default", "price": "n/a"})).unwrap();
        assert!(variant.price().is_none());
        assert_eq!(variant.display_title(), "Default");
    }

    #[test]
    fn test_variant_display_title_falls_back_to_option1() {
        let variant: Variant =
            serde_json::from_value(json!({"id": 5, "option1": "Rock - 90", "price": "90.00"}))
                .unwrap();
        assert_eq!(variant.display_title(), "Rock - 90");
        assert_eq!(variant.price().unwrap().to_string(), "90.00");
    }

    #[test]
    fn test_draft_order_omits_missing_customer() {
        let input = DraftOrderInput {
            line_items: vec![],
            customer: None,
            tags: "t".to_string(),
            note: "n".to_string(),
        };
        let value = serde_json::to_value(&input).unwrap();
        assert!(value.get("customer").is_none());
    }
}
