//! Integration tests for `POST /create-draft-order`.
//!
//! These tests verify the draft order payload sent to the Admin API and the
//! mapping of its answers back to the checkout form.

use axum::http::StatusCode;
use pricing_bridge_integration_tests::{TEST_TOKEN, TestBridge, admin_path};
use serde_json::{Value, json};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

fn gig_request() -> Value {
    json!({
        "productId": "1",
        "productTitle": "Gig",
        "price": "150.00",
        "properties": {"Secteur": "Jazz", "_Total à payer": "150.00"},
    })
}

// =============================================================================
// Success
// =============================================================================

#[tokio::test]
async fn test_creates_draft_order_and_returns_invoice_url() {
    let bridge = TestBridge::start().await;

    Mock::given(method("POST"))
        .and(path(admin_path("draft_orders.json")))
        .and(header("x-shopify-access-token", TEST_TOKEN))
        .and(body_partial_json(json!({
            "draft_order": {
                "line_items": [{
                    "title": "Gig",
                    "price": "150.00",
                    "quantity": 1,
                    "properties": [
                        {"name": "Secteur", "value": "Jazz"},
                        {"name": "_Total à payer", "value": "150.00"},
                    ],
                }],
                "tags": "draft-order, custom-pricing",
            }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "draft_order": {
                "id": 1_069_920_475,
                "name": "#D12",
                "invoice_url": "https://test.myshopify.com/1/invoices/abc",
                "status": "open",
            }
        })))
        .expect(1)
        .mount(&bridge.shopify)
        .await;

    let (status, body) = bridge.post("/create-draft-order", &gig_request()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["draftOrderId"], 1_069_920_475);
    assert_eq!(body["invoiceUrl"], "https://test.myshopify.com/1/invoices/abc");
    assert_eq!(body["draftOrderName"], "#D12");
    assert_eq!(body["data"]["status"], "open");
}

#[tokio::test]
async fn test_customer_email_attached_when_present() {
    let bridge = TestBridge::start().await;

    Mock::given(method("POST"))
        .and(path(admin_path("draft_orders.json")))
        .and(body_partial_json(json!({
            "draft_order": {"customer": {"email": "client@example.com"}}
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "draft_order": {"id": 7, "invoice_url": "https://invoice"}
        })))
        .expect(1)
        .mount(&bridge.shopify)
        .await;

    let mut request = gig_request();
    request["customerEmail"] = json!("client@example.com");
    let (status, body) = bridge.post("/create-draft-order", &request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["draftOrderId"], 7);
    assert!(body.get("draftOrderName").is_none());
}

// =============================================================================
// Failures
// =============================================================================

#[tokio::test]
async fn test_upstream_rejection_propagates_status_and_body() {
    let bridge = TestBridge::start().await;

    Mock::given(method("POST"))
        .and(path(admin_path("draft_orders.json")))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "errors": {"line_items": ["price is invalid"]}
        })))
        .mount(&bridge.shopify)
        .await;

    let (status, body) = bridge.post("/create-draft-order", &gig_request()).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Failed to create draft order");
    assert_eq!(body["details"]["errors"]["line_items"][0], "price is invalid");
}

#[tokio::test]
async fn test_non_json_upstream_error_is_wrapped_as_text() {
    let bridge = TestBridge::start().await;

    Mock::given(method("POST"))
        .and(path(admin_path("draft_orders.json")))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&bridge.shopify)
        .await;

    let (status, body) = bridge.post("/create-draft-order", &gig_request()).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["details"], "Service Unavailable");
}

#[tokio::test]
async fn test_unparseable_success_is_internal_error() {
    let bridge = TestBridge::start().await;

    Mock::given(method("POST"))
        .and(path(admin_path("draft_orders.json")))
        .respond_with(ResponseTemplate::new(201).set_body_string("<html>ok</html>"))
        .mount(&bridge.shopify)
        .await;

    let (status, body) = bridge.post("/create-draft-order", &gig_request()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Server error");
    assert!(body["details"].as_str().is_some_and(|d| !d.is_empty()));
}

#[tokio::test]
async fn test_missing_fields_never_reach_upstream() {
    let bridge = TestBridge::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&bridge.shopify)
        .await;

    for field in ["productId", "productTitle", "price"] {
        let mut request = gig_request();
        if let Some(object) = request.as_object_mut() {
            object.remove(field);
        }
        let (status, body) = bridge.post("/create-draft-order", &request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "missing {field}");
        assert_eq!(body["error"], "Missing data");
    }
}

#[tokio::test]
async fn test_missing_token_is_server_error() {
    let bridge = TestBridge::with_options(None, true).await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&bridge.shopify)
        .await;

    let (status, body) = bridge.post("/create-draft-order", &gig_request()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Server misconfigured");
}
