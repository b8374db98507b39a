/**
 * Signin Handler
 *
 * This module implements the user authentication handler for
 * POST /api/auth/signin.
 *
 * # Authentication Process
 *
 * 1. Validate the request body shape
 * 2. Look up the user by email
 * 3. Verify the password with bcrypt
 * 4. Sign a session JWT and set it as the session cookie
 * 5. Return the user
 *
 * # Security
 *
 * - Unknown email and wrong password both answer 401 with the same
 *   message, so responses do not reveal which accounts exist
 * - Passwords are never logged or returned in responses
 */

use axum::{extract::State, http::HeaderMap, response::Json};
use bcrypt::verify;
use validator::Validate;

use crate::auth::handlers::types::{AuthResponse, SigninRequest, UserResponse};
use crate::auth::sessions::create_session_token;
use crate::auth::users::get_user_by_email;
use crate::cookies::{self, session_cookie_options, SESSION_COOKIE};
use crate::error::ApiError;
use crate::server::state::AppState;

/// Sign-in handler
///
/// Verifies the email and password and issues a fresh session cookie on
/// success.
///
/// # Errors
///
/// * `400 Bad Request` - body failed validation
/// * `401 Unauthorized` - unknown email or wrong password
/// * `503 Service Unavailable` - database is not configured
/// * `500 Internal Server Error` - query, verification, or signing failed
pub async fn signin(
    State(state): State<AppState>,
    Json(request): Json<SigninRequest>,
) -> Result<(HeaderMap, Json<AuthResponse>), ApiError> {
    request
        .validate()
        .map_err(|e| ApiError::validation(e.to_string()))?;

    let pool = state.db_pool.as_ref().ok_or_else(|| {
        tracing::error!("signin rejected: database not configured");
        ApiError::unavailable("database not configured")
    })?;

    tracing::info!("signin request for email: {}", request.email);

    let user = get_user_by_email(pool, &request.email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("signin failed, unknown email: {}", request.email);
            ApiError::unauthorized("invalid email or password")
        })?;

    let valid = verify(&request.password, &user.password_hash)?;
    if !valid {
        tracing::warn!("signin failed, wrong password for: {}", request.email);
        return Err(ApiError::unauthorized("invalid email or password"));
    }

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

    tracing::info!("user signed in: {} ({})", user.name, user.email);

    Ok((
        headers,
        Json(AuthResponse {
            user: UserResponse::from(user),
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use crate::server::state::AppState;

    #[tokio::test]
    async fn test_signin_invalid_body() {
        let request = SigninRequest {
            email: "not-an-email".to_string(),
            password: "password123".to_string(),
        };

        let result = signin(State(AppState::without_database()), Json(request)).await;
        assert_eq!(
            result.unwrap_err().status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[tokio::test]
    async fn test_signin_no_database() {
        let request = SigninRequest {
            email: "user@example.com".to_string(),
            password: "password123".to_string(),
        };

        let result = signin(State(AppState::without_database()), Json(request)).await;
        assert_eq!(
            result.unwrap_err().status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }
}
