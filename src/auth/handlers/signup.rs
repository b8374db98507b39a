/**
 * Signup Handler
 *
 * This module implements the user registration handler for
 * POST /api/auth/signup.
 *
 * # Registration Process
 *
 * 1. Validate the request body (email format, password length, name)
 * 2. Check that no user exists with the same email
 * 3. Hash the password with bcrypt
 * 4. Create the user row
 * 5. Sign a session JWT and set it as the session cookie
 * 6. Return the created user
 *
 * # Security
 *
 * - Passwords are hashed with bcrypt at DEFAULT_COST
 * - Passwords and hashes are never returned in responses
 * - The session cookie is HttpOnly with SameSite=Strict
 */

use axum::{extract::State, http::HeaderMap, http::StatusCode, response::Json};
use bcrypt::{hash, DEFAULT_COST};
use validator::Validate;

use crate::auth::handlers::types::{AuthResponse, SignupRequest, UserResponse};
use crate::auth::sessions::create_session_token;
use crate::auth::users::{create_user, get_user_by_email, is_unique_violation};
use crate::cookies::{self, session_cookie_options, SESSION_COOKIE};
use crate::error::ApiError;
use crate::server::state::AppState;

/// Sign-up handler
///
/// Validates the input, creates the user account, and issues a session
/// cookie so the new user is signed in immediately.
///
/// # Errors
///
/// * `400 Bad Request` - body failed validation
/// * `409 Conflict` - a user with this email already exists
/// * `503 Service Unavailable` - database is not configured
/// * `500 Internal Server Error` - hashing, insert, or signing failed
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<(StatusCode, HeaderMap, Json<AuthResponse>), ApiError> {
    request
        .validate()
        .map_err(|e| ApiError::validation(e.to_string()))?;

    let pool = state.db_pool.as_ref().ok_or_else(|| {
        tracing::error!("signup rejected: database not configured");
        ApiError::unavailable("database not configured")
    })?;

    tracing::info!("signup request for email: {}", request.email);

    if get_user_by_email(pool, &request.email).await?.is_some() {
        tracing::warn!("signup rejected, email already registered: {}", request.email);
        return Err(ApiError::conflict("email already registered"));
    }

    let password_hash = hash(&request.password, DEFAULT_COST)?;

    let user = create_user(pool, request.email.clone(), password_hash, request.name.clone())
        .await
        .map_err(|e| {
            // Concurrent signup with the same email loses the race here
            if is_unique_violation(&e) {
                ApiError::conflict("email already registered")
            } else {
                ApiError::from(e)
            }
        })?;

    let token = create_session_token(
        user.id,
        &user.email,
        &user.role,
        &state.config.jwt_secret,
        state.config.session_ttl_minutes,
    )?;

    let mut headers = HeaderMap::new();
    cookies::set(
        &mut headers,
        SESSION_COOKIE,
        &token,
        &session_cookie_options(state.config.production),
    );

    tracing::info!("user created: {} ({})", user.name, user.email);

    Ok((
        StatusCode::CREATED,
        headers,
        Json(AuthResponse {
            user: UserResponse::from(user),
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::state::AppState;

    fn stateless() -> AppState {
        AppState::without_database()
    }

    #[tokio::test]
    async fn test_signup_invalid_email() {
        let request = SignupRequest {
            email: "invalid-email".to_string(),
            password: "password123".to_string(),
            name: "Test User".to_string(),
        };

        let result = signup(State(stateless()), Json(request)).await;
        assert_eq!(
            result.unwrap_err().status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[tokio::test]
    async fn test_signup_short_password() {
        let request = SignupRequest {
            email: "user@example.com".to_string(),
            password: "short".to_string(),
            name: "Test User".to_string(),
        };

        let result = signup(State(stateless()), Json(request)).await;
        assert_eq!(
            result.unwrap_err().status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[tokio::test]
    async fn test_signup_no_database() {
        let request = SignupRequest {
            email: "user@example.com".to_string(),
            password: "password123".to_string(),
            name: "Test User".to_string(),
        };

        let result = signup(State(stateless()), Json(request)).await;
        assert_eq!(
            result.unwrap_err().status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }
}
