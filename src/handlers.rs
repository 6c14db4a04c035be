// ============================
// auth-server/src/handlers.rs
// ============================
//! HTTP endpoint handlers.
use axum::{extract::State, http::StatusCode, response::IntoResponse, Extension, Json};
use serde::Deserialize;
use serde_json::json;

use crate::auth::{generate_access_token, hash_password, verify_password};
use crate::error::AppError;
use crate::middleware::CurrentUser;
use crate::router::ROUTES;
use crate::store::NewUser;
use crate::AppState;

/// Signup request body
#[derive(Deserialize)]
pub struct SignupRequest {
    name: Option<String>,
    #[serde(rename = "userName")]
    user_name: Option<String>,
    password: Option<String>,
}

/// Login request body
#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(rename = "userName")]
    user_name: Option<String>,
    password: Option<String>,
}

/// Reject absent or blank fields before anything touches the store
fn required(value: Option<String>, field: &'static str) -> Result<String, AppError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppError::Validation(field)),
    }
}

/// `GET /` — static manifest of the routes this server exposes
pub async fn list_endpoints() -> impl IntoResponse {
    let endpoints: Vec<_> = ROUTES
        .iter()
        .map(|(method, path)| json!({ "method": method, "path": path }))
        .collect();

    Json(json!({ "endpoints": endpoints }))
}

/// `POST /signup` — create a user and hand back its access token
pub async fn signup(
    State(state): State<AppState>,
    Json(body): Json<SignupRequest>,
) -> Result<impl IntoResponse, AppError> {
    let name = required(body.name, "name")?;
    let user_name = required(body.user_name, "userName")?;
    let password = required(body.password, "password")?;

    let password_hash =
        hash_password(&password).map_err(|e| AppError::Internal(e.to_string()))?;

    // Uniqueness is the store's job; its conflict error is the only
    // duplicate signal.
    let user = state
        .store
        .create_user(NewUser {
            name,
            user_name,
            password_hash,
            access_token: generate_access_token(),
        })
        .await
        .map_err(|e| match e {
            AppError::Internal(msg) => AppError::CreateFailed(msg),
            other => other,
        })?;

    tracing::info!(user_id = %user.id, user_name = %user.user_name, "user created");

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "id": user.id,
            "accessToken": user.access_token,
        })),
    ))
}

/// `POST /login` — verify credentials and return the stable access token
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user_name = required(body.user_name, "userName")?;
    let password = required(body.password, "password")?;

    let user = state
        .store
        .find_by_user_name(&user_name)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    if !verify_password(&user.password_hash, &password) {
        tracing::debug!(user_name = %user.user_name, "login rejected: bad password");
        return Err(AppError::Auth("Invalid password".to_string()));
    }

    tracing::info!(user_id = %user.id, "user logged in");

    // The token assigned at signup; login never rotates it
    Ok(Json(json!({
        "success": true,
        "userId": user.id,
        "accessToken": user.access_token,
    })))
}

/// `GET /logged-in` — confirmation probe behind the token middleware
pub async fn logged_in(
    user: Option<Extension<CurrentUser>>,
) -> Result<impl IntoResponse, AppError> {
    // The middleware already gated access; a missing extension means the
    // route was wired without it.
    let Extension(CurrentUser(user)) =
        user.ok_or_else(|| AppError::Auth("You are not logged in".to_string()))?;

    tracing::debug!(user_id = %user.id, "authenticated probe");

    Ok(Json(json!({
        "success": true,
        "response": "On secret site",
    })))
}
