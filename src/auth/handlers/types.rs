/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by the
 * authentication handlers, including their validation schemas.
 *
 * Request bodies are validated declaratively with `validator` derive
 * attributes; handlers call `validate()` before touching any other
 * layer and map failures to 400 responses.
 */

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::users::User;

/// Sign-up request
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct SignupRequest {
    /// User's email address
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    /// User's password (hashed before storage)
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,
    /// User's display name
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: String,
}

/// Sign-in request
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct SigninRequest {
    /// User's email address
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    /// User's password (verified against the stored hash)
    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: String,
}

/// Response body for sign-up and sign-in
///
/// The session token travels in the cookie, not the body.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    /// The authenticated user, without sensitive fields
    pub user: UserResponse,
}

/// Confirmation body for sign-out
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable confirmation
    pub message: String,
}

/// User information safe to return to clients
///
/// Never includes the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User's unique ID (UUID)
    pub id: String,
    /// User's email address
    pub email: String,
    /// User's display name
    pub name: String,
    /// User's role
    pub role: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email,
            name: user.name,
            role: user.role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_request_valid() {
        let request = SignupRequest {
            email: "user@example.com".to_string(),
            password: "password123".to_string(),
            name: "Test User".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_signup_request_rejects_bad_email() {
        let request = SignupRequest {
            email: "not-an-email".to_string(),
            password: "password123".to_string(),
            name: "Test User".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_signup_request_rejects_short_password() {
        let request = SignupRequest {
            email: "user@example.com".to_string(),
            password: "short".to_string(),
            name: "Test User".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_signup_request_rejects_empty_name() {
        let request = SignupRequest {
            email: "user@example.com".to_string(),
            password: "password123".to_string(),
            name: "".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_signin_request_rejects_empty_password() {
        let request = SigninRequest {
            email: "user@example.com".to_string(),
            password: "".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_user_response_strips_password_hash() {
        let user = User {
            id: uuid::Uuid::new_v4(),
            email: "user@example.com".to_string(),
            password_hash: "$2b$12$secret".to_string(),
            name: "Test User".to_string(),
            role: "user".to_string(),
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };

        let response = UserResponse::from(user);
        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("secret"));
        assert!(json.contains("user@example.com"));
    }
}
