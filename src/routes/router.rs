/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * the route configuration, request logging, and the fallback handler
 * into a single Axum router.
 */

use axum::Router;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::routes::api_routes::configure_api_routes;
use crate::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Route Details
///
/// - `POST /api/auth/signup` - user registration
/// - `POST /api/auth/signin` - user authentication
/// - `POST /api/auth/signout` - clear the session cookie
/// - `GET /api/auth/me` - current user (requires a valid session)
/// - anything else - 404
///
/// Every request is logged through `tower_http::trace`.
///
/// # Arguments
///
/// * `app_state` - application state shared by handlers and middleware
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router {
    let router = Router::new();

    let router = configure_api_routes(router, &app_state);

    let router = router.fallback(|| async { "404 Not Found" });

    router
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(app_state)
}
