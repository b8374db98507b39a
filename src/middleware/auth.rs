/**
 * Authentication Middleware
 *
 * This module provides middleware for routes that require a signed-in
 * user. It extracts the session token, verifies it, and attaches the
 * authenticated identity to the request extensions for handlers.
 *
 * # Token Sources
 *
 * The session cookie is the primary transport. An `Authorization:
 * Bearer` header is accepted as a fallback for non-browser clients.
 */

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::sessions::verify_session_token;
use crate::auth::users::get_user_by_id;
use crate::cookies::{self, SESSION_COOKIE};
use crate::error::ApiError;
use crate::server::state::AppState;

/// Authenticated identity extracted from a verified session token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub email: String,
    pub role: String,
}

/// Authentication middleware
///
/// This middleware:
/// 1. Reads the session token from the session cookie, falling back to
///    the `Authorization: Bearer` header
/// 2. Verifies the token signature and expiry
/// 3. Confirms the user still exists when a database is configured
/// 4. Attaches an [`AuthenticatedUser`] to the request extensions
///
/// Returns 401 if the token is missing or invalid.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = session_token(request.headers()).ok_or_else(|| {
        tracing::warn!("missing session token");
        ApiError::unauthorized("authentication required")
    })?;

    let claims = verify_session_token(&token, &state.config.jwt_secret).map_err(|e| {
        tracing::warn!("invalid session token: {:?}", e);
        ApiError::unauthorized("invalid or expired session")
    })?;

    let user_id = Uuid::parse_str(&claims.sub).map_err(|e| {
        tracing::error!("malformed user id in session token: {:?}", e);
        ApiError::unauthorized("invalid or expired session")
    })?;

    // A token can outlive its user; re-check when a database is present
    if let Some(pool) = &state.db_pool {
        if let Err(e) = verify_user_exists(pool, user_id).await {
            tracing::warn!("session for missing user {}: {:?}", user_id, e);
            return Err(ApiError::unauthorized("invalid or expired session"));
        }
    }

    request.extensions_mut().insert(AuthenticatedUser {
        user_id,
        email: claims.email,
        role: claims.role,
    });

    Ok(next.run(request).await)
}

/// Pull the session token from the request headers
///
/// Cookie first, `Authorization: Bearer` second.
fn session_token(headers: &HeaderMap) -> Option<String> {
    if let Some(token) = cookies::get(headers, SESSION_COOKIE) {
        return Some(token);
    }

    headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(|t| t.to_string())
}

/// Verify the user row still exists
async fn verify_user_exists(pool: &PgPool, user_id: Uuid) -> Result<(), sqlx::Error> {
    get_user_by_id(pool, user_id)
        .await?
        .ok_or(sqlx::Error::RowNotFound)?;
    Ok(())
}

/// Axum extractor for the authenticated user
///
/// Used as a handler parameter on routes mounted behind
/// [`auth_middleware`].
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl axum::extract::FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                ApiError::unauthorized("authentication required")
            })?;

        Ok(AuthUser(user))
    }
}
