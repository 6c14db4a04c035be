// ============================
// auth-server/src/error.rs
// ============================
//! Central error type + Axum integration.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Application error types, one variant per response class
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0} is required")]
    Validation(&'static str),

    #[error("A user already exists with this {0}")]
    Conflict(&'static str),

    #[error("{0}")]
    Auth(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),

    // Persistence failure during signup. The original API reported these as
    // client errors, so the status stays 400 for wire compatibility.
    #[error("Could not create user: {0}")]
    CreateFailed(String),
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::Conflict(_) | AppError::CreateFailed(_) => {
                StatusCode::BAD_REQUEST
            },
            AppError::Auth(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get a sanitized message suitable for production use
    pub fn sanitized_message(&self) -> String {
        match self {
            AppError::Internal(_) => "An internal server error occurred".to_string(),
            AppError::CreateFailed(_) => "Could not create user".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Use detailed messages in development, sanitized in production
        let message = if cfg!(debug_assertions) {
            self.to_string()
        } else {
            self.sanitized_message()
        };

        let body = serde_json::json!({
            "success": false,
            "error": message,
        });

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[test]
    fn test_app_error_display() {
        assert_eq!(AppError::Validation("name").to_string(), "name is required");
        assert_eq!(
            AppError::Conflict("username").to_string(),
            "A user already exists with this username"
        );
        assert_eq!(
            AppError::Auth("Invalid password".to_string()).to_string(),
            "Invalid password"
        );
        assert_eq!(
            AppError::NotFound("User not found".to_string()).to_string(),
            "User not found"
        );
    }

    #[test]
    fn test_app_error_status_codes() {
        assert_eq!(
            AppError::Validation("password").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Conflict("name").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Auth("No access token provided".to_string()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::NotFound("User not found".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Internal("store unavailable".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::CreateFailed("duplicate key".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_app_error_into_response() {
        let response = AppError::NotFound("User not found".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response_headers = response.headers();
        assert!(response_headers
            .get("content-type")
            .unwrap()
            .to_str()
            .unwrap()
            .contains("application/json"));
    }

    #[test]
    fn test_sanitized_message_hides_internal_detail() {
        let err = AppError::Internal("connection refused at 10.0.0.3".to_string());
        assert!(!err.sanitized_message().contains("10.0.0.3"));

        // Client-class errors keep their message as-is
        let err = AppError::Auth("Invalid password".to_string());
        assert_eq!(err.sanitized_message(), "Invalid password");
    }
}
