/**
 * Server Initialization
 *
 * This module assembles the application: configuration in, router out.
 *
 * # Initialization Process
 *
 * 1. Create the optional database pool and run migrations
 * 2. Build the shared application state
 * 3. Create the router with all routes and middleware
 *
 * A missing database is logged and the server starts anyway; routes
 * that need it answer 503.
 */

use std::sync::Arc;

use axum::Router;

use crate::routes::router::create_router;
use crate::server::config::{load_database, AppConfig};
use crate::server::state::AppState;

/// Create and configure the application
///
/// # Arguments
///
/// * `config` - configuration loaded by the entry point
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub async fn create_app(config: AppConfig) -> Router {
    tracing::info!("initializing authbase server");

    let db_pool = load_database(&config).await;

    let app_state = AppState {
        db_pool,
        config: Arc::new(config),
    };

    let app = create_router(app_state);

    tracing::info!("router configured");

    app
}
