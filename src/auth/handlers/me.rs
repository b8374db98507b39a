/**
 * Current User Handler
 *
 * This module implements the handler for GET /api/auth/me, which
 * returns the currently authenticated user.
 *
 * The route is mounted behind the auth middleware, so by the time this
 * handler runs the session token has already been verified and the
 * authenticated identity sits in the request extensions. The handler
 * re-reads the user row so the response reflects current data.
 */

use axum::{extract::State, response::Json};
use sqlx::PgPool;

use crate::auth::handlers::types::UserResponse;
use crate::auth::users::get_user_by_id;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;

/// Current-user handler
///
/// # Errors
///
/// * `401 Unauthorized` - produced by the auth middleware before this
///   handler runs
/// * `404 Not Found` - the user row no longer exists
/// * `503 Service Unavailable` - database is not configured
/// * `500 Internal Server Error` - database query failed
pub async fn me(
    State(pool): State<Option<PgPool>>,
    AuthUser(auth): AuthUser,
) -> Result<Json<UserResponse>, ApiError> {
    let pool = pool.ok_or_else(|| {
        tracing::error!("me rejected: database not configured");
        ApiError::unavailable("database not configured")
    })?;

    let user = get_user_by_id(&pool, auth.user_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!("authenticated user no longer exists: {}", auth.user_id);
            ApiError::not_found("user not found")
        })?;

    Ok(Json(UserResponse::from(user)))
}
