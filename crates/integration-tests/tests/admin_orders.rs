//! Admin order listing, search, and status management.

use axum::http::StatusCode;
use serde_json::json;
use solestore_integration_tests::{admin_app, admin_login, expect_json, get, send_json};

#[tokio::test]
async fn test_orders_list_newest_first() {
    let app = admin_app();
    let cookie = admin_login(&app).await;

    let body = expect_json(get(&app, "/orders", Some(&cookie)).await, StatusCode::OK).await;
    let orders = body.as_array().cloned().unwrap_or_default();
    assert_eq!(orders.len(), 5);

    let created: Vec<&str> = orders
        .iter()
        .filter_map(|o| o["created_at"].as_str())
        .collect();
    assert!(created.windows(2).all(|w| w[0] >= w[1]));
}

#[tokio::test]
async fn test_orders_filter_by_status() {
    let app = admin_app();
    let cookie = admin_login(&app).await;

    let body = expect_json(
        get(&app, "/orders?status=delivered", Some(&cookie)).await,
        StatusCode::OK,
    )
    .await;
    let orders = body.as_array().cloned().unwrap_or_default();
    assert_eq!(orders.len(), 2);
    assert!(orders.iter().all(|o| o["status"] == "delivered"));
}

#[tokio::test]
async fn test_orders_search_by_id_and_name() {
    let app = admin_app();
    let cookie = admin_login(&app).await;

    let body = expect_json(
        get(&app, "/orders?q=ORD-003", Some(&cookie)).await,
        StatusCode::OK,
    )
    .await;
    let orders = body.as_array().cloned().unwrap_or_default();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0]["id"], "ORD-003");

    // Recipient name search is case-insensitive
    let body = expect_json(
        get(&app, "/orders?q=sarah", Some(&cookie)).await,
        StatusCode::OK,
    )
    .await;
    let orders = body.as_array().cloned().unwrap_or_default();
    assert!(!orders.is_empty());
}

#[tokio::test]
async fn test_order_detail_keeps_price_snapshot() {
    let app = admin_app();
    let cookie = admin_login(&app).await;

    let body = expect_json(
        get(&app, "/orders/ORD-001", Some(&cookie)).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(body["id"], "ORD-001");
    // Line totals come from prices captured at purchase, not the live catalog
    let items = body["items"].as_array().cloned().unwrap_or_default();
    assert!(!items.is_empty());
    for item in &items {
        assert!(item["price"].is_string());
    }

    let response = get(&app, "/orders/ORD-999", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_set_status_allows_any_transition() {
    let app = admin_app();
    let cookie = admin_login(&app).await;

    // ORD-001 is seeded delivered; winding it back to pending is allowed
    let body = expect_json(
        send_json(
            &app,
            "PUT",
            "/orders/ORD-001/status",
            &json!({ "status": "pending" }),
            Some(&cookie),
        )
        .await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(body["status"], "pending");

    let body = expect_json(
        send_json(
            &app,
            "PUT",
            "/orders/ORD-001/status",
            &json!({ "status": "cancelled" }),
            Some(&cookie),
        )
        .await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(body["status"], "cancelled");
}

#[tokio::test]
async fn test_set_status_rejects_unknown_status() {
    let app = admin_app();
    let cookie = admin_login(&app).await;

    let response = send_json(
        &app,
        "PUT",
        "/orders/ORD-001/status",
        &json!({ "status": "teleported" }),
        Some(&cookie),
    )
    .await;
    // Serde rejects the enum label before the handler runs
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
