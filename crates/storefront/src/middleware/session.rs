//! Session layer configuration.
//!
//! Sessions back the cart the way browser local storage backs it in a
//! client-rendered shop: the cart item list is written on every change and
//! rehydrated on the next request. The store is in-memory, matching the
//! process-local mock dataset - sessions do not outlive the process.

use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer, cookie::time::Duration};

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "solestore_session";

/// Days of inactivity before a session (and its cart) expires.
const SESSION_EXPIRY_DAYS: i64 = 30;

/// Create the session management layer.
#[must_use]
pub fn create_session_layer() -> SessionManagerLayer<MemoryStore> {
    SessionManagerLayer::new(MemoryStore::default())
        .with_name(SESSION_COOKIE_NAME)
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(Duration::days(SESSION_EXPIRY_DAYS)))
}
