// Authentication and authorization error types

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tracing::{error, warn};

use crate::auth::models::{AccessLevel, Role};
use crate::error::ErrorResponse;

/// Authentication and authorization error types
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    // Authentication errors
    #[error("Incorrect username or password")]
    InvalidCredentials,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token has expired")]
    ExpiredToken,

    #[error("Missing authentication token")]
    MissingToken,

    /// Token was valid but its subject no longer exists
    #[error("Unknown user: {0}")]
    UnknownUser(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Password hashing error: {0}")]
    PasswordHashError(String),

    #[error("Token generation error: {0}")]
    TokenGenerationError(String),

    // Authorization errors
    /// User lacks the permission tier required by the operation
    #[error("Insufficient permissions: required '{required}', user has role '{actual}'")]
    InsufficientPermissions { required: AccessLevel, actual: Role },
}

impl From<sqlx::Error> for AuthError {
    fn from(err: sqlx::Error) -> Self {
        AuthError::DatabaseError(err.to_string())
    }
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::InvalidCredentials
            | AuthError::InvalidToken
            | AuthError::ExpiredToken
            | AuthError::MissingToken
            | AuthError::UnknownUser(_) => StatusCode::UNAUTHORIZED,
            AuthError::InsufficientPermissions { .. } => StatusCode::FORBIDDEN,
            AuthError::DatabaseError(_)
            | AuthError::PasswordHashError(_)
            | AuthError::TokenGenerationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to send to clients (no sensitive data)
    pub fn error_message(&self) -> String {
        match self {
            AuthError::InvalidCredentials => "Incorrect username or password".to_string(),
            AuthError::InvalidToken | AuthError::UnknownUser(_) => {
                "Could not validate credentials".to_string()
            }
            AuthError::ExpiredToken => "Token has expired".to_string(),
            AuthError::MissingToken => "Not authenticated".to_string(),
            AuthError::InsufficientPermissions { .. } => {
                "You do not have permission to access this resource".to_string()
            }
            AuthError::DatabaseError(_)
            | AuthError::PasswordHashError(_)
            | AuthError::TokenGenerationError(_) => "Internal server error".to_string(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self.status_code() {
            StatusCode::UNAUTHORIZED => "UNAUTHORIZED",
            StatusCode::FORBIDDEN => "FORBIDDEN",
            _ => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match &self {
            AuthError::InvalidCredentials => warn!("Failed login attempt"),
            AuthError::InvalidToken => warn!("Invalid token attempt"),
            AuthError::ExpiredToken => warn!("Expired token attempt"),
            AuthError::MissingToken => warn!("Missing token in request"),
            AuthError::UnknownUser(username) => {
                warn!("Token presented for unknown user '{}'", username)
            }
            AuthError::InsufficientPermissions { required, actual } => {
                warn!(
                    "Authorization failed: required '{}', user has role '{}'",
                    required, actual
                )
            }
            AuthError::DatabaseError(msg) => error!("Database error in auth: {}", msg),
            AuthError::PasswordHashError(msg) => error!("Password hashing error: {}", msg),
            AuthError::TokenGenerationError(msg) => error!("Token generation error: {}", msg),
        }

        let status = self.status_code();
        let body = Json(ErrorResponse::new(self.error_code(), self.error_message()));
        let mut response = (status, body).into_response();

        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        response
    }
}
