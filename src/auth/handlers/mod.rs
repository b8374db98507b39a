//! Authentication Handlers Module
//!
//! This module contains all HTTP handlers for authentication endpoints.
//!
//! # Module Structure
//!
//! ```
//! handlers/
//! ├── mod.rs      - Module exports
//! ├── types.rs    - Request and response types with validation schemas
//! ├── signup.rs   - User registration handler
//! ├── signin.rs   - User authentication handler
//! ├── signout.rs  - Session cookie clearing handler
//! └── me.rs       - Current user handler
//! ```
//!
//! # Handlers
//!
//! - **`signup`** - POST /api/auth/signup - create account, issue session
//! - **`signin`** - POST /api/auth/signin - verify credentials, issue session
//! - **`signout`** - POST /api/auth/signout - clear the session cookie
//! - **`me`** - GET /api/auth/me - current user (behind auth middleware)

/// Request and response types
pub mod types;

/// Signup handler
pub mod signup;

/// Signin handler
pub mod signin;

/// Signout handler
pub mod signout;

/// Current user handler
pub mod me;

pub use types::{AuthResponse, MessageResponse, SigninRequest, SignupRequest, UserResponse};

pub use me::me;
pub use signin::signin;
pub use signout::signout;
pub use signup::signup;
