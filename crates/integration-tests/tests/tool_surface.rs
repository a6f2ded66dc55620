//! In-process tests for the tool surface.
//!
//! These drive the axum router directly with `oneshot`, so they need no
//! running server. Each test gets its own seeded store.

#![allow(clippy::unwrap_used)]

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use coralbay_integration_tests::seeded_router;

async fn invoke(router: axum::Router, tool: &str, input: Value) -> (StatusCode, Value) {
    let request = Request::post(format!("/tools/{tool}"))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(input.to_string()))
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}

#[tokio::test]
async fn test_tool_listing_exposes_all_eight_tools() {
    let response = seeded_router()
        .oneshot(Request::get("/tools").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let tools: Value = serde_json::from_slice(&bytes).unwrap();

    let names: Vec<&str> = tools
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(names.len(), 8);
    assert!(names.contains(&"process_refund"));
    assert!(names.contains(&"create_support_ticket"));
}

#[tokio::test]
async fn test_order_status_includes_items_and_tracking() {
    let (status, body) = invoke(
        seeded_router(),
        "get_order_status",
        json!({ "order_id": "ORD-001" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["order"]["status"], "shipped");
    assert_eq!(body["order"]["tracking_number"], "TRK123456789");
    assert_eq!(body["order"]["items"][0]["product"], "Laptop");
    assert_eq!(body["order"]["total"], "1029.98");
}

#[tokio::test]
async fn test_processing_order_journey() {
    // The seeded ORD-002 is in Processing with total 699.99: the address
    // can still move, the order can still cancel, and the cancelled order
    // then refunds in full.
    let router = seeded_router();

    let (status, body) = invoke(
        router.clone(),
        "update_shipping_address",
        json!({ "order_id": "ORD-002", "new_address": "789 New Rd" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["address_update"]["previous_address"],
        "456 Oak Ave, Another City, ST 67890"
    );

    let (_, body) = invoke(
        router.clone(),
        "cancel_order",
        json!({ "order_id": "ORD-002" }),
    )
    .await;
    assert_eq!(body["cancellation"]["already_cancelled"], false);
    assert_eq!(body["cancellation"]["reason"], "Customer request");

    let (_, body) = invoke(
        router.clone(),
        "process_refund",
        json!({ "order_id": "ORD-002" }),
    )
    .await;
    assert_eq!(body["refund"]["refund_amount"], "699.99");
    assert_eq!(body["refund"]["refund_type"], "Full");

    // The refund is recorded on the order.
    let (_, body) = invoke(
        router,
        "get_order_status",
        json!({ "order_id": "ORD-002" }),
    )
    .await;
    assert_eq!(body["order"]["status"], "refunded");
    assert_eq!(body["order"]["shipping_address"], "789 New Rd");
}

#[tokio::test]
async fn test_shipped_order_rejects_cancellation_without_mutation() {
    let router = seeded_router();

    let (status, body) = invoke(
        router.clone(),
        "cancel_order",
        json!({ "order_id": "ORD-001" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["error"]["kind"], "illegal_transition");

    let (_, body) = invoke(router, "get_order_status", json!({ "order_id": "ORD-001" })).await;
    assert_eq!(body["order"]["status"], "shipped");
}

#[tokio::test]
async fn test_search_customer_by_email_any_case() {
    let (_, body) = invoke(
        seeded_router(),
        "search_customer",
        json!({ "email": "JOHN.DOE@EMAIL.COM" }),
    )
    .await;

    assert_eq!(body["customer"]["id"], "CUST-123");
    assert_eq!(body["customer"]["loyalty_tier"], "Gold");
    assert_eq!(body["recent_orders"][0]["order_id"], "ORD-001");
}

#[tokio::test]
async fn test_search_customer_without_parameters() {
    let (status, body) = invoke(seeded_router(), "search_customer", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["error"]["kind"], "invalid_argument");
}

#[tokio::test]
async fn test_ticket_creation_and_lookup() {
    let router = seeded_router();

    let (_, body) = invoke(
        router.clone(),
        "create_support_ticket",
        json!({
            "customer_id": "CUST-456",
            "subject": "Wrong color",
            "description": "Ordered black, received silver",
            "priority": "High",
            "order_id": "ORD-002",
        }),
    )
    .await;
    assert_eq!(body["ticket"]["ticket_id"], "TKT-002");
    assert_eq!(body["ticket"]["priority"], "high");
    assert_eq!(body["ticket"]["customer_email"], "jane.smith@email.com");

    let (_, body) = invoke(
        router,
        "get_ticket_status",
        json!({ "ticket_id": "TKT-002" }),
    )
    .await;
    assert_eq!(body["ticket"]["subject"], "Wrong color");
    assert_eq!(body["ticket"]["status"], "open");
    assert_eq!(body["ticket"]["agent_assigned"], Value::Null);
}

#[tokio::test]
async fn test_unknown_tool_and_bad_arguments_map_to_http_errors() {
    let (status, _) = invoke(seeded_router(), "frobnicate", json!({})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = invoke(seeded_router(), "get_order_status", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_customer_orders_listing() {
    let (_, body) = invoke(
        seeded_router(),
        "get_customer_orders",
        json!({ "customer_id": "CUST-123", "limit": 5 }),
    )
    .await;

    assert_eq!(body["total_found"], 1);
    assert_eq!(body["orders"][0]["order_id"], "ORD-001");
    assert_eq!(body["customer"]["loyalty_tier"], "Gold");
}
