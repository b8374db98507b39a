/**
 * Signout Handler
 *
 * This module implements the handler for POST /api/auth/signout.
 *
 * Sessions are stateless JWTs, so there is nothing to revoke
 * server-side: signing out clears the session cookie. The expiring
 * Set-Cookie carries the same base attributes as issuance so the
 * browser matches the cookie's path and samesite scope when deleting.
 *
 * The operation is total. It succeeds whether or not the request
 * carried a session cookie, and it never touches the database.
 */

use std::sync::Arc;

use axum::{extract::State, http::HeaderMap, response::Json};

use crate::auth::handlers::types::MessageResponse;
use crate::cookies::{self, session_cookie_options, SESSION_COOKIE};
use crate::server::config::AppConfig;

/// Sign-out handler
///
/// Expires the session cookie on the client and confirms.
pub async fn signout(State(config): State<Arc<AppConfig>>) -> (HeaderMap, Json<MessageResponse>) {
    let mut headers = HeaderMap::new();
    cookies::clear(
        &mut headers,
        SESSION_COOKIE,
        &session_cookie_options(config.production),
    );

    tracing::info!("session cookie cleared");

    (
        headers,
        Json(MessageResponse {
            message: "signed out".to_string(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::SET_COOKIE;

    #[tokio::test]
    async fn test_signout_clears_cookie() {
        let config = Arc::new(AppConfig::default());
        let (headers, body) = signout(State(config)).await;

        let set_cookie = headers.get(SET_COOKIE).unwrap().to_str().unwrap();
        assert!(set_cookie.starts_with("session=;"));
        assert!(set_cookie.contains("Max-Age=0"));
        assert_eq!(body.message, "signed out");
    }

    #[tokio::test]
    async fn test_signout_secure_in_production() {
        let config = Arc::new(AppConfig {
            production: true,
            ..AppConfig::default()
        });
        let (headers, _) = signout(State(config)).await;

        let set_cookie = headers.get(SET_COOKIE).unwrap().to_str().unwrap();
        assert!(set_cookie.contains("Secure"));
    }
}
