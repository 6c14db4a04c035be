// ============================
// auth-server/src/router.rs
// ============================
//! Route table and router construction.
use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers;
use crate::middleware::require_token;
use crate::AppState;

/// Static manifest of every route this server exposes, served by `GET /`.
/// Kept by hand; update it when a route is added.
pub const ROUTES: &[(&str, &str)] = &[
    ("GET", "/"),
    ("POST", "/signup"),
    ("POST", "/login"),
    ("GET", "/logged-in"),
];

/// Create the HTTP router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::list_endpoints))
        .route("/signup", post(handlers::signup))
        .route("/login", post(handlers::login))
        .route(
            "/logged-in",
            get(handlers::logged_in)
                .layer(from_fn_with_state(state.clone(), require_token)),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
