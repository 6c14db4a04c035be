// ============================
// auth-server/src/middleware/auth.rs
// ============================
//! Token-authentication middleware.
use axum::{
    extract::State,
    http::{header::AUTHORIZATION, Request},
    middleware::Next,
    response::Response,
};

use crate::{error::AppError, store::User, AppState};

/// The user resolved from the bearer token, attached to the request
/// extensions for downstream handlers.
#[derive(Clone)]
pub struct CurrentUser(pub User);

/// Resolve the `Authorization` header to a user before the handler runs.
///
/// Header presence is checked before touching the store, so unauthenticated
/// requests never cost a lookup.
pub async fn require_token(
    State(state): State<AppState>,
    mut request: Request<axum::body::Body>,
    next: Next,
) -> Result<Response, AppError> {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::Auth("No access token provided".to_string()))?
        .to_string();

    let user = state
        .store
        .find_by_token(&token)
        .await?
        .ok_or_else(|| {
            tracing::debug!("rejected unknown access token");
            AppError::Auth("You are not logged in".to_string())
        })?;

    request.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(request).await)
}
