// ============================
// auth-server/src/lib.rs
// ============================
//! Core functionality for the user-authentication HTTP API.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod store;

use std::sync::Arc;

use crate::store::UserStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// User persistence store
    pub store: Arc<dyn UserStore>,
}

impl AppState {
    /// Create a new application state over the given store
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }
}
