//! Session Cookie Module
//!
//! This module owns everything about the session cookie: the attribute
//! record and its defaults, and the set/get/clear operations used by the
//! authentication handlers.
//!
//! # Module Structure
//!
//! ```
//! cookies/
//! ├── mod.rs     - Module exports
//! ├── options.rs - CookieOptions, SameSite, default constructor
//! └── jar.rs     - CookieWriter/CookieReader traits, set/get/clear
//! ```
//!
//! # Design
//!
//! The operations are written against two capability traits rather than
//! concrete request/response types: a writer that accepts `Set-Cookie`
//! header values and a reader that looks up a request cookie by name.
//! `axum::http::HeaderMap` implements both, and tests exercise the
//! helper with plain header maps and no running server.

/// Cookie attribute record and defaults
pub mod options;

/// Cookie operations and capability traits
pub mod jar;

pub use jar::{clear, get, set, CookieReader, CookieWriter};
pub use options::{session_cookie_options, CookieOptions, SameSite, SESSION_COOKIE};
