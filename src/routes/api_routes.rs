/**
 * API Route Handlers
 *
 * This module wires the authentication endpoints into the router.
 *
 * # Routes
 *
 * ## Public
 * - `POST /api/auth/signup` - user registration
 * - `POST /api/auth/signin` - user authentication
 * - `POST /api/auth/signout` - clear the session cookie
 *
 * ## Protected
 * - `GET /api/auth/me` - current user, behind the auth middleware
 */

use axum::{middleware::from_fn_with_state, routing::get, routing::post, Router};

use crate::auth::{me, signin, signout, signup};
use crate::middleware::auth::auth_middleware;
use crate::server::state::AppState;

/// Configure API routes
///
/// Public routes are added directly; protected routes are grouped and
/// wrapped with the auth middleware so the session token is verified
/// before their handlers run.
///
/// # Arguments
///
/// * `router` - the router to add routes to
/// * `state` - shared state, needed by the middleware layer
pub fn configure_api_routes(router: Router<AppState>, state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/api/auth/me", get(me))
        .route_layer(from_fn_with_state(state.clone(), auth_middleware));

    router
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/signin", post(signin))
        .route("/api/auth/signout", post(signout))
        .merge(protected)
}
