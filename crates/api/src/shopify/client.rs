//! Admin REST API client.

use std::sync::Arc;

use pricing_bridge_core::ProductId;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error, instrument};

use super::ShopifyError;
use super::types::{
    CreatedDraftOrder, DraftOrder, DraftOrderInput, DraftOrderRequest, DraftOrderResponse,
    Variant, VariantInput, VariantRequest, VariantResponse, VariantsResponse,
};
use crate::config::ShopifyAdminConfig;

/// Page size used when listing a product's variants (the API maximum).
pub const VARIANT_PAGE_LIMIT: u32 = 250;

const ACCESS_TOKEN_HEADER: &str = "x-shopify-access-token";

/// Shopify Admin REST API client.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Clone)]
pub struct AdminClient {
    inner: Arc<AdminClientInner>,
}

struct AdminClientInner {
    client: reqwest::Client,
    config: ShopifyAdminConfig,
}

impl std::fmt::Debug for AdminClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminClient")
            .field("store", &self.inner.config.store)
            .field("api_version", &self.inner.config.api_version)
            .finish_non_exhaustive()
    }
}

impl AdminClient {
    /// Create a new Admin API client authenticated with `access_token`.
    ///
    /// # Errors
    ///
    /// Returns error if the token is not a valid header value or the HTTP
    /// client fails to build.
    pub fn new(
        config: &ShopifyAdminConfig,
        access_token: &SecretString,
    ) -> Result<Self, ShopifyError> {
        let mut token = HeaderValue::from_str(access_token.expose_secret())
            .map_err(|e| ShopifyError::InvalidToken(e.to_string()))?;
        token.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(ACCESS_TOKEN_HEADER, token);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            inner: Arc::new(AdminClientInner {
                client,
                config: config.clone(),
            }),
        })
    }

    /// Create a draft order.
    ///
    /// # Errors
    ///
    /// Returns `ShopifyError::Api` with the platform's status and body when
    /// the draft order is rejected.
    #[instrument(skip(self, input), fields(line_items = input.line_items.len()))]
    pub async fn create_draft_order(
        &self,
        input: &DraftOrderInput,
    ) -> Result<CreatedDraftOrder, ShopifyError> {
        let response: DraftOrderResponse = self
            .post(
                "draft_orders.json",
                &DraftOrderRequest { draft_order: input },
            )
            .await?;

        let draft_order: DraftOrder = serde_json::from_value(response.draft_order.clone())
            .map_err(|e| ShopifyError::Parse(format!("Invalid draft order: {e}")))?;

        debug!(draft_order_id = %draft_order.id, "Draft order created");

        Ok(CreatedDraftOrder {
            draft_order,
            raw: response.draft_order,
        })
    }

    /// List a product's variants (first page, up to [`VARIANT_PAGE_LIMIT`]).
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the product is unknown.
    #[instrument(skip_all, fields(product_id = %product_id))]
    pub async fn list_variants(&self, product_id: ProductId) -> Result<Vec<Variant>, ShopifyError> {
        let response: VariantsResponse = self
            .get(&format!(
                "products/{product_id}/variants.json?limit={VARIANT_PAGE_LIMIT}"
            ))
            .await?;

        debug!(count = response.variants.len(), "Variants listed");
        Ok(response.variants)
    }

    /// Create a variant on a product.
    ///
    /// # Errors
    ///
    /// Returns `ShopifyError::Api` with the platform's status and body when
    /// the variant is rejected.
    #[instrument(skip_all, fields(product_id = %product_id, sku = %input.sku))]
    pub async fn create_variant(
        &self,
        product_id: ProductId,
        input: &VariantInput,
    ) -> Result<Variant, ShopifyError> {
        let response: VariantResponse = self
            .post(
                &format!("products/{product_id}/variants.json"),
                &VariantRequest { variant: input },
            )
            .await?;

        debug!(variant_id = %response.variant.id, "Variant created");
        Ok(response.variant)
    }

    /// Execute a GET request against an Admin REST resource.
    async fn get<T: DeserializeOwned>(&self, resource: &str) -> Result<T, ShopifyError> {
        let url = self.inner.config.resource_url(resource);
        let response = self.inner.client.get(&url).send().await?;
        Self::handle_response(response).await
    }

    /// Execute a POST request against an Admin REST resource.
    async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        resource: &str,
        body: &B,
    ) -> Result<T, ShopifyError> {
        let url = self.inner.config.resource_url(resource);
        let response = self.inner.client.post(&url).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Parse a success body, or turn a failure into `ShopifyError::Api`.
    async fn handle_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ShopifyError> {
        let status = response.status();
        let text = response.text().await?;

        if status.is_success() {
            return serde_json::from_str(&text)
                .map_err(|e| ShopifyError::Parse(format!("Failed to parse response: {e}")));
        }

        // Non-JSON error pages (proxies, maintenance) are passed through as text
        let body = serde_json::from_str(&text).unwrap_or(Value::String(text));
        error!(status = status.as_u16(), body = %body, "Shopify Admin API error");

        Err(ShopifyError::Api {
            status: status.as_u16(),
            body,
        })
    }
}
