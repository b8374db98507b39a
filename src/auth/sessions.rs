/**
 * Session Tokens
 *
 * This module handles JWT creation and verification for user sessions.
 *
 * Sessions are stateless: the signed token carries the user's identity
 * claims and an expiry, and nothing is persisted server-side. Signing
 * out simply clears the cookie that transports the token.
 *
 * The signing secret and lifetime are passed in by callers (they live
 * in `AppConfig`), so this module performs no environment reads and is
 * directly testable.
 */

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims carried by a session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// User email
    pub email: String,
    /// User role
    pub role: String,
    /// Issued-at time (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Create a session token for a user
///
/// # Arguments
///
/// * `user_id` - User ID
/// * `email` - User email
/// * `role` - User role
/// * `secret` - HMAC signing secret
/// * `ttl_minutes` - Token lifetime in minutes
///
/// # Returns
///
/// Encoded JWT string
pub fn create_session_token(
    user_id: Uuid,
    email: &str,
    role: &str,
    secret: &str,
    ttl_minutes: i64,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now();

    let claims = Claims {
        sub: user_id.to_string(),
        email: email.to_string(),
        role: role.to_string(),
        iat: now.timestamp(),
        exp: (now + Duration::minutes(ttl_minutes)).timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Verify and decode a session token
///
/// Signature and expiry are both checked.
///
/// # Arguments
///
/// * `token` - JWT string
/// * `secret` - HMAC signing secret
///
/// # Returns
///
/// Decoded claims or error
pub fn verify_session_token(
    token: &str,
    secret: &str,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )?;
    Ok(token_data.claims)
}
