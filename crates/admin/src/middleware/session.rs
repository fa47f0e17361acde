//! Session layer configuration for admin logins.

use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer, cookie::time::Duration};

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "solestore_admin_session";

/// Hours of inactivity before an admin session expires.
const SESSION_EXPIRY_HOURS: i64 = 8;

/// Create the session management layer.
#[must_use]
pub fn create_session_layer() -> SessionManagerLayer<MemoryStore> {
    SessionManagerLayer::new(MemoryStore::default())
        .with_name(SESSION_COOKIE_NAME)
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(Duration::hours(SESSION_EXPIRY_HOURS)))
}
