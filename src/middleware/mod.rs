//! Middleware Module
//!
//! This module contains HTTP middleware for the server. Middleware runs
//! before handlers, currently for authentication on protected routes;
//! request logging is handled by `tower_http::trace` at router assembly.

pub mod auth;

pub use auth::{auth_middleware, AuthUser, AuthenticatedUser};
