// ============================
// auth-server/src/middleware/mod.rs
// ============================
//! Middleware for the authentication API.

pub mod auth;

pub use auth::{require_token, CurrentUser};
