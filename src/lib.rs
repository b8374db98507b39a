//! Authbase - Main Library
//!
//! Authbase is a minimal user-authentication REST backend: account
//! sign-up, credential sign-in, cookie-based JWT sessions, and a
//! current-user endpoint, served over Axum with PostgreSQL storage.
//!
//! # Overview
//!
//! The library provides:
//! - Axum HTTP server setup and configuration
//! - Authentication handlers and JWT session tokens
//! - A session cookie helper built on capability traits
//! - Request validation and a uniform JSON error shape
//! - Structured logging to console and optional file sink
//!
//! # Module Structure
//!
//! ```
//! src/
//! ├── lib.rs       - Module exports and documentation
//! ├── server/      - Configuration, state, app assembly
//! ├── routes/      - Router and endpoint wiring
//! ├── auth/        - Handlers, user model, session tokens
//! ├── cookies/     - Session cookie options and operations
//! ├── middleware/  - Authentication middleware
//! ├── error/       - ApiError and response conversion
//! └── logging.rs   - Tracing subscriber setup
//! ```
//!
//! # Request Flow
//!
//! Client request → router → middleware (protected routes) → handler
//! (validate body) → data layer (sqlx) → handler (sign JWT, set cookie,
//! return JSON).
//!
//! # Error Handling
//!
//! Handlers return `Result<_, ApiError>` and propagate failures with
//! the `?` operator; `ApiError` renders as a JSON body with the
//! matching HTTP status code.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication and user management
pub mod auth;

/// Session cookie helper
pub mod cookies;

/// Middleware for request processing
pub mod middleware;

/// API error types
pub mod error;

/// Logging configuration
pub mod logging;

pub use error::ApiError;
pub use routes::create_router;
pub use server::{create_app, AppConfig, AppState};
