//! Integration tests for Solestore.
//!
//! Tests exercise the real routers in-process with `tower::ServiceExt`, so
//! no server or external state is needed. Session continuity is driven by
//! round-tripping the session cookie by hand.
//!
//! # Test Categories
//!
//! - `storefront_*` - Public catalog, search, and cart flows
//! - `admin_*` - Login, product CRUD, order management, dashboard

#![cfg_attr(not(test), forbid(unsafe_code))]

use axum::{
    Router,
    body::Body,
    http::{Request, Response, StatusCode, header},
};
use serde_json::Value;
use tower::ServiceExt;

/// Build the storefront router over a freshly seeded catalog.
///
/// The artificial catalog latency is disabled so tests run at full speed.
#[must_use]
pub fn storefront_app() -> Router {
    let config = solestore_storefront::config::StorefrontConfig {
        catalog_delay_ms: 0,
        ..solestore_storefront::config::StorefrontConfig::default()
    };
    let state = solestore_storefront::state::AppState::seeded(config);
    Router::new()
        .merge(solestore_storefront::routes::routes())
        .layer(solestore_storefront::middleware::create_session_layer())
        .with_state(state)
}

/// Build the admin router over freshly seeded stores.
///
/// Credentials are the configuration defaults: admin / admin123.
#[must_use]
pub fn admin_app() -> Router {
    let config = solestore_admin::config::AdminConfig::default();
    let state = solestore_admin::state::AppState::seeded(config);
    Router::new()
        .merge(solestore_admin::routes::routes())
        .layer(solestore_admin::middleware::create_session_layer())
        .with_state(state)
}

/// Send a request and return the raw response.
///
/// # Panics
///
/// Panics when the router fails to produce a response.
pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone()
        .oneshot(request)
        .await
        .expect("router should produce a response")
}

/// GET a path, optionally with a session cookie.
///
/// # Panics
///
/// Panics on a malformed request or unresponsive router.
pub async fn get(app: &Router, path: &str, cookie: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().uri(path);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    let request = builder.body(Body::empty()).expect("valid request");
    send(app, request).await
}

/// POST a JSON body to a path, optionally with a session cookie.
///
/// # Panics
///
/// Panics on a malformed request or unresponsive router.
pub async fn post_json(
    app: &Router,
    path: &str,
    body: &Value,
    cookie: Option<&str>,
) -> Response<Body> {
    send_json(app, "POST", path, body, cookie).await
}

/// Send a JSON body with an arbitrary method.
///
/// # Panics
///
/// Panics on a malformed request or unresponsive router.
pub async fn send_json(
    app: &Router,
    method: &str,
    path: &str,
    body: &Value,
    cookie: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    let request = builder
        .body(Body::from(body.to_string()))
        .expect("valid request");
    send(app, request).await
}

/// Extract the session cookie pair from a response, if one was set.
#[must_use]
pub fn session_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(str::to_owned)
}

/// Read a response body as JSON.
///
/// # Panics
///
/// Panics when the body is not valid JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

/// Assert a status and return the JSON body.
///
/// # Panics
///
/// Panics when the status differs or the body is not JSON.
pub async fn expect_json(response: Response<Body>, status: StatusCode) -> Value {
    assert_eq!(response.status(), status, "unexpected status");
    body_json(response).await
}

/// Log into the admin app with the default credentials, returning the
/// session cookie to attach to subsequent requests.
///
/// # Panics
///
/// Panics when login fails.
pub async fn admin_login(app: &Router) -> String {
    let response = post_json(
        app,
        "/auth/login",
        &serde_json::json!({ "username": "admin", "password": "admin123" }),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK, "login should succeed");
    session_cookie(&response).expect("login should set a session cookie")
}
