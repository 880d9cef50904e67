//! Integration tests for Pricing Bridge.
//!
//! Tests drive the real axum router in-process and point the Admin API
//! client at a `wiremock` server, so no network access or Shopify store is
//! needed.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p pricing-bridge-integration-tests
//! ```

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use pricing_bridge_api::config::{BridgeConfig, ShopifyAdminConfig};
use pricing_bridge_api::routes;
use pricing_bridge_api::state::AppState;
use secrecy::SecretString;
use serde_json::Value;
use tower::ServiceExt;
use url::Url;
use wiremock::MockServer;

/// Access token the bridge is configured with.
pub const TEST_TOKEN: &str = "shpat_integration_test_token";

/// Admin API version the bridge is configured with.
pub const API_VERSION: &str = "2024-01";

/// Path of an Admin REST resource on the mock server.
#[must_use]
pub fn admin_path(resource: &str) -> String {
    format!("/admin/api/{API_VERSION}/{resource}")
}

/// A bridge router wired to a mock Admin API.
pub struct TestBridge {
    /// Mock Shopify Admin API.
    pub shopify: MockServer,
    app: Router,
}

impl TestBridge {
    /// Start a bridge with a configured token and unique variant titles.
    pub async fn start() -> Self {
        Self::with_options(Some(TEST_TOKEN), true).await
    }

    /// Start a bridge with explicit token and title settings.
    ///
    /// # Panics
    ///
    /// Panics if the mock server URL or the test token is unusable.
    #[allow(clippy::unwrap_used)]
    pub async fn with_options(token: Option<&str>, unique_variant_titles: bool) -> Self {
        let shopify = MockServer::start().await;

        let config = BridgeConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 0,
            cors_origin: "*".to_string(),
            unique_variant_titles,
            shopify: ShopifyAdminConfig {
                store: "test.myshopify.com".to_string(),
                api_version: API_VERSION.to_string(),
                access_token: token.map(SecretString::from),
                base_url: Url::parse(&shopify.uri()).unwrap(),
            },
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 0.0,
        };

        let app = routes::app(AppState::new(config).unwrap());
        Self { shopify, app }
    }

    /// POST a JSON body and return the status and parsed JSON response.
    ///
    /// An empty response body is returned as `Value::Null`.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built or the response is not JSON.
    #[allow(clippy::unwrap_used)]
    pub async fn post(&self, path: &str, body: &Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        if bytes.is_empty() {
            return (status, Value::Null);
        }
        (status, serde_json::from_slice(&bytes).unwrap())
    }
}
