//! Route Configuration Module
//!
//! This module configures all HTTP routes for the server.
//!
//! # Module Structure
//!
//! ```
//! routes/
//! ├── mod.rs        - Module exports
//! ├── router.rs     - Main router creation
//! └── api_routes.rs - Authentication endpoint wiring
//! ```
//!
//! # Route Organization
//!
//! 1. **API Routes** - authentication endpoints, with the protected
//!    group behind the auth middleware
//! 2. **Fallback Handler** - 404 for unknown routes

/// Main router creation
pub mod router;

/// API endpoint wiring
pub mod api_routes;

pub use router::create_router;
