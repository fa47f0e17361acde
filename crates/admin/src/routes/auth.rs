//! Admin login and logout.
//!
//! Credentials come from configuration, not a user table. This is a demo
//! auth scheme: one admin account, plaintext comparison against the
//! configured password. The session cookie is what subsequent requests
//! authenticate with.

use axum::{Json, extract::State};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::error::{AppError, Result};
use crate::middleware::RequireAdminAuth;
use crate::models::{CurrentAdmin, session_keys};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub username: String,
}

/// Log in with username and password.
///
/// A failed attempt always answers with the same message regardless of which
/// field was wrong.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let config = state.config();
    let ok = payload.username == config.admin_username
        && payload.password == *config.admin_password.expose_secret();
    if !ok {
        tracing::warn!(username = %payload.username, "Failed admin login attempt");
        return Err(AppError::BadRequest("Invalid username or password".into()));
    }

    let admin = CurrentAdmin::new(payload.username);
    session.insert(session_keys::CURRENT_ADMIN, &admin).await?;
    tracing::info!(username = %admin.username, "Admin logged in");

    Ok(Json(LoginResponse {
        username: admin.username,
    }))
}

/// Log out, destroying the session.
pub async fn logout(session: Session) -> Result<Json<serde_json::Value>> {
    session.flush().await?;
    Ok(Json(serde_json::json!({ "logged_out": true })))
}

/// The current admin identity, 401 when not logged in.
pub async fn me(RequireAdminAuth(admin): RequireAdminAuth) -> Json<CurrentAdmin> {
    Json(admin)
}
