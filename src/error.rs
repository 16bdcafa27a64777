// Error handling module for the Coffee Shop API
// Provides centralized error types and HTTP response conversion

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use chrono::Utc;
use serde::Serialize;
use std::fmt;
use tracing::{debug, error, warn};

/// Inventory counters a sale can run out of
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockResource {
    Coffee,
    Milk,
}

impl StockResource {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockResource::Coffee => "coffee",
            StockResource::Milk => "milk",
        }
    }
}

impl fmt::Display for StockResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Main error type for catalog, inventory, sales and reporting operations
///
/// Each variant maps to a specific HTTP status code and error response format.
/// Authentication failures live in [`crate::auth::AuthError`].
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Request validation failed (HTTP 400)
    #[error("Request validation failed")]
    ValidationError(validator::ValidationErrors),

    /// Malformed request that is not tied to a single field (HTTP 400)
    #[error("{0}")]
    BadRequest(String),

    /// Referenced record does not exist (HTTP 404)
    #[error("{resource} not found")]
    NotFound { resource: String, id: String },

    /// A sale would drive an inventory counter below zero (HTTP 400)
    #[error("Not enough {resource} in stock")]
    InsufficientStock { resource: StockResource },

    /// Write rejected by a uniqueness or reference constraint (HTTP 409)
    #[error("{message}")]
    Conflict { message: String },

    /// Database failure (HTTP 500, details are logged only)
    #[error("Database error: {0}")]
    DatabaseError(sqlx::Error),

    /// Any other server-side failure (HTTP 500, details are logged only)
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Consistent error response structure
///
/// Shared by every error type in the API so clients see one JSON shape:
/// a machine-readable `error_code`, a human-readable `message`, optional
/// field-level `details` and an RFC 3339 `timestamp`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error_code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    pub timestamp: String,
}

impl ErrorResponse {
    pub fn new(error_code: &str, message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.to_string(),
            message: message.into(),
            details: None,
            timestamp: Utc::now().to_rfc3339(),
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_response) = self.to_error_response();
        (status, Json(error_response)).into_response()
    }
}

impl ApiError {
    /// Shorthand for a missing record
    pub fn not_found(resource: &str, id: impl fmt::Display) -> Self {
        ApiError::NotFound {
            resource: resource.to_string(),
            id: id.to_string(),
        }
    }

    /// Map constraint violations to `Conflict`, everything else as `From<sqlx::Error>`
    pub fn from_constraint(err: sqlx::Error, conflict_message: impl Into<String>) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() || db_err.is_foreign_key_violation() {
                return ApiError::Conflict {
                    message: conflict_message.into(),
                };
            }
        }
        ApiError::from(err)
    }

    /// Convert ApiError to HTTP status code and ErrorResponse
    ///
    /// Client errors are logged at debug/warn, server errors at error level.
    /// Database and internal details never reach the client.
    fn to_error_response(&self) -> (StatusCode, ErrorResponse) {
        let status = self.status_code();
        let response = match self {
            ApiError::ValidationError(errors) => {
                debug!("Validation error: {:?}", errors);
                ErrorResponse::new("VALIDATION_ERROR", "Request validation failed").with_details(
                    serde_json::to_value(errors).unwrap_or(serde_json::json!({})),
                )
            }
            ApiError::BadRequest(message) => {
                debug!("Bad request: {}", message);
                ErrorResponse::new("BAD_REQUEST", message.clone())
            }
            ApiError::NotFound { resource, id } => {
                debug!("Resource not found: {} with id {}", resource, id);
                ErrorResponse::new("NOT_FOUND", format!("{} with id {} not found", resource, id))
            }
            ApiError::InsufficientStock { resource } => {
                debug!("Insufficient {} stock", resource);
                ErrorResponse::new(
                    "INSUFFICIENT_STOCK",
                    format!("Not enough {} in stock", resource),
                )
                .with_details(serde_json::json!({ "resource": resource.as_str() }))
            }
            ApiError::Conflict { message } => {
                warn!("Conflict error: {}", message);
                ErrorResponse::new("CONFLICT", message.clone())
            }
            ApiError::DatabaseError(db_error) => {
                error!("Database error: {:?}", db_error);
                ErrorResponse::new("DATABASE_ERROR", "A database error occurred")
            }
            ApiError::InternalError(internal_msg) => {
                error!("Internal error: {}", internal_msg);
                ErrorResponse::new("INTERNAL_ERROR", "An internal server error occurred")
            }
        };
        (status, response)
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::InsufficientStock { .. } => StatusCode::BAD_REQUEST,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// PostgreSQL `numeric_value_out_of_range`
const NUMERIC_OUT_OF_RANGE: &str = "22003";

impl From<sqlx::Error> for ApiError {
    fn from(error: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &error {
            if db_err.code().as_deref() == Some(NUMERIC_OUT_OF_RANGE) {
                return ApiError::BadRequest("Numeric value out of range".to_string());
            }
        }
        ApiError::DatabaseError(error)
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ApiError::ValidationError(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::not_found("Coffee", 1).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::InsufficientStock { resource: StockResource::Milk }.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Conflict { message: "taken".into() }.status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::DatabaseError(sqlx::Error::RowNotFound).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_insufficient_stock_names_resource() {
        let (_, body) = ApiError::InsufficientStock {
            resource: StockResource::Coffee,
        }
        .to_error_response();

        assert_eq!(body.error_code, "INSUFFICIENT_STOCK");
        assert_eq!(body.message, "Not enough coffee in stock");
        assert_eq!(body.details.unwrap()["resource"], "coffee");
    }

    #[test]
    fn test_not_found_message() {
        let (_, body) = ApiError::not_found("Recipe", 7).to_error_response();
        assert_eq!(body.message, "Recipe with id 7 not found");
    }

    #[test]
    fn test_database_error_is_not_leaked() {
        let (_, body) = ApiError::DatabaseError(sqlx::Error::PoolTimedOut).to_error_response();
        assert_eq!(body.message, "A database error occurred");
        assert!(body.details.is_none());
    }

    #[test]
    fn test_non_constraint_error_stays_database_error() {
        let err = ApiError::from_constraint(sqlx::Error::RowNotFound, "duplicate");
        assert!(matches!(err, ApiError::DatabaseError(_)));
    }
}
