//! Middleware for the admin API.

mod auth;
mod session;

pub use auth::RequireAdminAuth;
pub use session::create_session_layer;
