//! API Error Module
//!
//! This module defines the error type shared by all HTTP handlers and
//! its conversion into HTTP responses.
//!
//! # Module Structure
//!
//! ```
//! error/
//! ├── mod.rs        - Module exports
//! ├── types.rs      - ApiError definition and status mapping
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # HTTP Response Conversion
//!
//! `ApiError` implements `IntoResponse`, so handlers can return
//! `Result<_, ApiError>` and propagate failures with `?`. The error is
//! rendered as a JSON body with an `error` message and a `status` code.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::ApiError;
