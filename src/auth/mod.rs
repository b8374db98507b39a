//! Authentication Module
//!
//! This module handles user registration, credential verification, and
//! session tokens.
//!
//! # Module Structure
//!
//! ```
//! auth/
//! ├── mod.rs          - Module exports
//! ├── users.rs        - User model and database operations
//! ├── sessions.rs     - JWT creation and verification
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── signup.rs   - User registration handler
//!     ├── signin.rs   - User authentication handler
//!     ├── signout.rs  - Session clearing handler
//!     └── me.rs       - Current user handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signup**: email + password + name → user created → session cookie set
//! 2. **Signin**: email + password → credentials verified → session cookie set
//! 3. **Signout**: session cookie cleared on the client
//! 4. **Me**: session cookie verified by middleware → user info returned
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage
//! - Sessions are stateless JWTs carried in an HttpOnly cookie
//! - Tokens expire with the cookie (fifteen minutes by default)
//! - Invalid credentials answer 401 without revealing which field failed

/// User data model and database operations
pub mod users;

/// JWT creation and verification
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::types::{AuthResponse, MessageResponse, SigninRequest, SignupRequest, UserResponse};
pub use handlers::{me, signin, signout, signup};
