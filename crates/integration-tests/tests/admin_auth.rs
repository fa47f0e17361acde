//! Admin login, logout, and session enforcement.

use axum::http::StatusCode;
use serde_json::json;
use solestore_integration_tests::{
    admin_app, admin_login, expect_json, get, post_json, session_cookie,
};

#[tokio::test]
async fn test_login_with_valid_credentials() {
    let app = admin_app();
    let response = post_json(
        &app,
        "/auth/login",
        &json!({ "username": "admin", "password": "admin123" }),
        None,
    )
    .await;
    assert!(session_cookie(&response).is_some());
    let body = expect_json(response, StatusCode::OK).await;
    assert_eq!(body["username"], "admin");
}

#[tokio::test]
async fn test_login_rejects_bad_credentials() {
    let app = admin_app();

    for (username, password) in [
        ("admin", "wrong"),
        ("nobody", "admin123"),
        ("", ""),
    ] {
        let response = post_json(
            &app,
            "/auth/login",
            &json!({ "username": username, "password": password }),
            None,
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        // Same message whichever field was wrong
        let body = expect_json(response, StatusCode::BAD_REQUEST).await;
        assert_eq!(body["error"], "Bad request: Invalid username or password");
    }
}

#[tokio::test]
async fn test_protected_routes_require_login() {
    let app = admin_app();

    for path in ["/auth/me", "/products", "/orders", "/dashboard/stats"] {
        let response = get(&app, path, None).await;
        assert_eq!(
            response.status(),
            StatusCode::UNAUTHORIZED,
            "{path} should require auth"
        );
    }
}

#[tokio::test]
async fn test_me_and_logout() {
    let app = admin_app();
    let cookie = admin_login(&app).await;

    let body = expect_json(get(&app, "/auth/me", Some(&cookie)).await, StatusCode::OK).await;
    assert_eq!(body["username"], "admin");

    let response = post_json(&app, "/auth/logout", &json!({}), Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);

    // The old cookie no longer authenticates
    let response = get(&app, "/auth/me", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
