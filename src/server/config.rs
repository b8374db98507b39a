/**
 * Server Configuration
 *
 * This module loads server configuration from the environment and
 * initializes the optional PostgreSQL connection pool.
 *
 * # Configuration Sources
 *
 * Configuration comes from environment variables (a `.env` file is
 * loaded by the entry point), with development defaults where a value
 * is safe to default.
 *
 * # Error Handling
 *
 * Configuration problems are logged but do not prevent startup. A
 * missing or unreachable database leaves the pool unset and the server
 * runs with database-backed routes answering 503.
 */

use std::path::PathBuf;

use sqlx::PgPool;

/// Fallback signing secret for development
const DEV_JWT_SECRET: &str = "dev-secret-change-in-production";

/// Process configuration, read once at startup
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port the HTTP listener binds to
    pub port: u16,
    /// PostgreSQL connection string, `None` disables database features
    pub database_url: Option<String>,
    /// HMAC secret for signing session tokens
    pub jwt_secret: String,
    /// Session token and cookie lifetime in minutes
    pub session_ttl_minutes: i64,
    /// Production mode flag, controls the cookie `Secure` attribute
    pub production: bool,
    /// Optional JSON log file sink
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            database_url: None,
            jwt_secret: DEV_JWT_SECRET.to_string(),
            session_ttl_minutes: 15,
            production: false,
            log_file: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from the environment
    ///
    /// # Environment Variables
    ///
    /// - `SERVER_PORT` - listener port (default 3000)
    /// - `DATABASE_URL` - PostgreSQL connection string (optional)
    /// - `JWT_SECRET` - session signing secret (falls back to a dev
    ///   value with a warning)
    /// - `SESSION_TTL_MINUTES` - session lifetime (default 15)
    /// - `APP_ENV` - `production` enables the cookie `Secure` attribute
    /// - `LOG_FILE` - JSON log sink path (optional)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let port = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.port);

        let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set, using development secret");
            defaults.jwt_secret
        });

        let session_ttl_minutes = std::env::var("SESSION_TTL_MINUTES")
            .ok()
            .and_then(|m| m.parse().ok())
            .unwrap_or(defaults.session_ttl_minutes);

        let production = std::env::var("APP_ENV")
            .map(|env| env == "production")
            .unwrap_or(false);

        Self {
            port,
            database_url: std::env::var("DATABASE_URL").ok(),
            jwt_secret,
            session_ttl_minutes,
            production,
            log_file: std::env::var("LOG_FILE").ok().map(PathBuf::from),
        }
    }
}

/// Create the database connection pool and run migrations
///
/// # Returns
///
/// - `Some(PgPool)` when the database is configured and reachable
/// - `None` when `DATABASE_URL` is unset or the connection fails
///
/// Errors are logged but never abort startup.
pub async fn load_database(config: &AppConfig) -> Option<PgPool> {
    let database_url = match &config.database_url {
        Some(url) => url,
        None => {
            tracing::warn!("DATABASE_URL not set, database features disabled");
            return None;
        }
    };

    tracing::info!("connecting to database");

    let pool = match PgPool::connect(database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("failed to create database connection pool: {:?}", e);
            tracing::warn!("database features disabled");
            return None;
        }
    };

    tracing::info!("database connection pool created");

    match sqlx::migrate!().run(&pool).await {
        Ok(_) => tracing::info!("database migrations completed"),
        Err(e) => {
            // Migrations may already be applied by an earlier deploy
            tracing::error!("failed to run database migrations: {:?}", e);
            tracing::warn!("continuing, database may not be up to date");
        }
    }

    Some(pool)
}
