//! Inbound line-item payloads posted by the storefront pricing form.
//!
//! The form is loosely typed: IDs and prices arrive as strings or numbers,
//! and optional fields may be absent, `null`, or empty. [`LineItemRequest`]
//! accepts all of that, and the `validate_*` methods turn it into the strict
//! shapes each forwarder operation needs.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use super::id::{ParseIdError, ProductId};
use super::price::{Price, PriceError};
use super::properties::Properties;

/// Errors raised while validating an inbound line item.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Request body is not a JSON object.
    #[error("request body must be a JSON object: {0}")]
    Malformed(String),

    /// One or more required fields are missing or empty.
    #[error("{0} are required")]
    MissingFields(&'static str),

    #[error(transparent)]
    InvalidProductId(#[from] ParseIdError),

    #[error(transparent)]
    InvalidPrice(#[from] PriceError),

    /// `properties` is present but not a JSON object.
    #[error("properties must be a JSON object")]
    InvalidProperties,
}

/// Raw line-item request as posted by the storefront.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemRequest {
    pub product_id: Option<Value>,
    pub product_title: Option<Value>,
    pub price: Option<Value>,
    pub properties: Option<Value>,
    pub customer_email: Option<Value>,
}

/// Validated input for creating a draft order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftOrderLine {
    pub product_id: ProductId,
    pub title: String,
    pub price: Price,
    pub properties: Properties,
    pub customer_email: Option<String>,
}

/// Validated input for finding or creating a price variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantLine {
    pub product_id: ProductId,
    pub title: Option<String>,
    pub price: Price,
    pub properties: Properties,
}

impl LineItemRequest {
    /// Parse a request body.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::Malformed` if the body is not a JSON object.
    pub fn from_slice(body: &[u8]) -> Result<Self, ValidationError> {
        serde_json::from_slice(body).map_err(|e| ValidationError::Malformed(e.to_string()))
    }

    /// Validate for draft order creation (`productId`, `productTitle`, `price`).
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if a required field is missing or invalid.
    pub fn validate_draft_order(&self) -> Result<DraftOrderLine, ValidationError> {
        let (Some(product_id), Some(title), Some(price)) = (
            field_text(self.product_id.as_ref()),
            field_text(self.product_title.as_ref()),
            field_text(self.price.as_ref()),
        ) else {
            return Err(ValidationError::MissingFields(
                "productId, productTitle and price",
            ));
        };

        Ok(DraftOrderLine {
            product_id: product_id.parse()?,
            title,
            price: price.parse()?,
            properties: self.parse_properties()?,
            customer_email: field_text(self.customer_email.as_ref()),
        })
    }

    /// Validate for variant lookup or creation (`productId`, `price`).
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if a required field is missing or invalid.
    pub fn validate_variant(&self) -> Result<VariantLine, ValidationError> {
        let (Some(product_id), Some(price)) = (
            field_text(self.product_id.as_ref()),
            field_text(self.price.as_ref()),
        ) else {
            return Err(ValidationError::MissingFields("productId and price"));
        };

        Ok(VariantLine {
            product_id: product_id.parse()?,
            title: field_text(self.product_title.as_ref()),
            price: price.parse()?,
            properties: self.parse_properties()?,
        })
    }

    fn parse_properties(&self) -> Result<Properties, ValidationError> {
        match &self.properties {
            None | Some(Value::Null) => Ok(Properties::default()),
            Some(Value::Object(object)) => Ok(Properties::from_object(object)),
            Some(_) => Err(ValidationError::InvalidProperties),
        }
    }
}

/// Text of a scalar field, or `None` when absent, `null`, empty, or non-scalar.
fn field_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    fn request(value: &Value) -> LineItemRequest {
        LineItemRequest::from_slice(value.to_string().as_bytes()).unwrap()
    }

    #[test]
    fn test_draft_order_valid() {
        let req = request(&json!({
            "productId": "1",
            "productTitle": "Gig",
            "price": "150.00",
            "properties": {"Secteur": "Jazz", "_Total à payer": "150.00"},
            "customerEmail": "client@example.com",
        }));
        let line = req.validate_draft_order().unwrap();

        assert_eq!(line.product_id, ProductId::new(1));
        assert_eq!(line.title, "Gig");
        assert_eq!(line.price.to_string(), "150.00");
        assert_eq!(line.properties.get("Secteur"), Some("Jazz"));
        assert_eq!(line.customer_email.as_deref(), Some("client@example.com"));
    }

    #[test]
    fn test_draft_order_accepts_numbers() {
        let req = request(&json!({"productId": 42, "productTitle": "Gig", "price": 99.5}));
        let line = req.validate_draft_order().unwrap();
        assert_eq!(line.product_id, ProductId::new(42));
        assert_eq!(line.price.to_string(), "99.5");
        assert!(line.properties.is_empty());
        assert!(line.customer_email.is_none());
    }

    #[test]
    fn test_draft_order_missing_fields() {
        let cases = [
            json!({"productTitle": "Gig", "price": "150.00"}),
            json!({"productId": "1", "price": "150.00"}),
            json!({"productId": "1", "productTitle": "Gig"}),
            json!({"productId": "", "productTitle": "Gig", "price": "150.00"}),
            json!({"productId": "1", "productTitle": null, "price": "150.00"}),
            json!({}),
        ];
        for case in &cases {
            let err = request(case).validate_draft_order().unwrap_err();
            assert!(
                matches!(err, ValidationError::MissingFields(_)),
                "expected missing fields for {case}"
            );
        }
    }

    #[test]
    fn test_variant_title_optional() {
        let req = request(&json!({"productId": "7", "price": "80"}));
        let line = req.validate_variant().unwrap();
        assert_eq!(line.product_id, ProductId::new(7));
        assert!(line.title.is_none());
    }

    #[test]
    fn test_variant_missing_price() {
        let err = request(&json!({"productId": "7", "productTitle": "Gig"}))
            .validate_variant()
            .unwrap_err();
        assert_eq!(err.to_string(), "productId and price are required");
    }

    #[test]
    fn test_invalid_price_and_product_id() {
        let err = request(&json!({"productId": "1", "productTitle": "Gig", "price": "abc"}))
            .validate_draft_order()
            .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidPrice(_)));

        let err = request(&json!({"productId": "nope", "price": "10"}))
            .validate_variant()
            .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidProductId(_)));
    }

    #[test]
    fn test_properties_must_be_object() {
        let err = request(&json!({"productId": "1", "price": "10", "properties": ["a"]}))
            .validate_variant()
            .unwrap_err();
        assert_eq!(err, ValidationError::InvalidProperties);
    }

    #[test]
    fn test_malformed_body() {
        assert!(matches!(
            LineItemRequest::from_slice(b"not json"),
            Err(ValidationError::Malformed(_))
        ));
        assert!(matches!(
            LineItemRequest::from_slice(b"[1, 2]"),
            Err(ValidationError::Malformed(_))
        ));
    }
}
