/**
 * API Error Types
 *
 * This module defines the error type used by HTTP handlers and the
 * supporting layers they call. Every variant maps to a single HTTP
 * status code and carries enough context to produce a response body.
 *
 * # Error Categories
 *
 * - `Validation` - request body failed schema validation (400)
 * - `Unauthorized` - missing or invalid credentials/token (401)
 * - `NotFound` - a referenced row no longer exists (404)
 * - `Conflict` - uniqueness violation, e.g. duplicate email (409)
 * - `Unavailable` - a required service is not configured (503)
 * - `Database` / `Hash` / `Token` - internal failures (500)
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Errors produced while handling an API request
///
/// Handlers return `Result<_, ApiError>`; the `IntoResponse` impl in
/// `error::conversion` turns each variant into a JSON error response.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body failed validation
    #[error("validation failed: {message}")]
    Validation {
        /// Human-readable description of what failed
        message: String,
    },

    /// Credentials or session token were missing or invalid
    #[error("unauthorized: {message}")]
    Unauthorized {
        /// Human-readable error message
        message: String,
    },

    /// A referenced resource does not exist
    #[error("not found: {message}")]
    NotFound {
        /// Human-readable error message
        message: String,
    },

    /// The request conflicts with existing state
    #[error("conflict: {message}")]
    Conflict {
        /// Human-readable error message
        message: String,
    },

    /// A required backing service is not configured
    #[error("service unavailable: {message}")]
    Unavailable {
        /// Human-readable error message
        message: String,
    },

    /// Database query failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Password hashing or verification failure
    #[error("password hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    /// Session token signing failure
    #[error("token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}

impl ApiError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create an unauthorized error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Create a not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Create a service-unavailable error
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Validation` - 400 Bad Request
    /// - `Unauthorized` - 401 Unauthorized
    /// - `NotFound` - 404 Not Found
    /// - `Conflict` - 409 Conflict
    /// - `Unavailable` - 503 Service Unavailable
    /// - `Database` / `Hash` / `Token` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            Self::Database(_) | Self::Hash(_) | Self::Token(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the message to expose in the response body
    ///
    /// Internal failures (5xx) are masked with a generic message; the
    /// underlying error is logged, not serialized.
    pub fn public_message(&self) -> String {
        match self {
            Self::Validation { message }
            | Self::Unauthorized { message }
            | Self::NotFound { message }
            | Self::Conflict { message }
            | Self::Unavailable { message } => message.clone(),
            Self::Database(_) | Self::Hash(_) | Self::Token(_) => {
                "internal server error".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let error = ApiError::validation("email is invalid");
        match error {
            ApiError::Validation { message } => assert_eq!(message, "email is invalid"),
            _ => panic!("Expected Validation"),
        }
    }

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(
            ApiError::validation("bad").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::unauthorized("nope").status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::not_found("gone").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::conflict("taken").status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::unavailable("no db").status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            ApiError::Database(sqlx::Error::RowNotFound).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_public_message_masks_internal_errors() {
        let error = ApiError::Database(sqlx::Error::RowNotFound);
        assert_eq!(error.public_message(), "internal server error");

        let error = ApiError::conflict("email already registered");
        assert_eq!(error.public_message(), "email already registered");
    }
}
