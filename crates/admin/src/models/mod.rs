//! Session-backed models for the admin API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Session keys used by the admin API.
pub mod session_keys {
    /// The logged-in admin, set on login and cleared on logout.
    pub const CURRENT_ADMIN: &str = "admin.current";
}

/// The admin identity stored in the session after a successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentAdmin {
    pub username: String,
    pub logged_in_at: DateTime<Utc>,
}

impl CurrentAdmin {
    #[must_use]
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            logged_in_at: Utc::now(),
        }
    }
}
