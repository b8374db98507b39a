/**
 * Application State
 *
 * This module defines the shared state handed to every handler and the
 * `FromRef` implementations that let handlers extract just the piece
 * they need.
 *
 * # Thread Safety
 *
 * `AppState` is `Clone` and cheap to clone: the pool is a handle and
 * the configuration sits behind an `Arc`. There is no mutable shared
 * state; each request works with its own clone.
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::server::config::AppConfig;

/// Shared application state
///
/// # Fields
///
/// * `db_pool` - optional PostgreSQL pool; `None` when the database is
///   not configured, in which case database-backed routes answer 503
/// * `config` - process configuration read once at startup
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db_pool: Option<PgPool>,
    /// Process configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// State with no database and default configuration
    ///
    /// Matches what startup produces when `DATABASE_URL` is unset; also
    /// what handler tests construct.
    pub fn without_database() -> Self {
        Self {
            db_pool: None,
            config: Arc::new(AppConfig::default()),
        }
    }
}

/// Extract the optional database pool directly
///
/// Lets handlers that only query take `State<Option<PgPool>>`.
impl FromRef<AppState> for Option<PgPool> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

/// Extract the configuration directly
///
/// Lets handlers that only need settings take `State<Arc<AppConfig>>`.
impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}
