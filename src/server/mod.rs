//! Server Module
//!
//! This module contains everything needed to stand the HTTP server up:
//! configuration loading, shared application state, and app assembly.
//!
//! # Module Structure
//!
//! ```
//! server/
//! ├── mod.rs    - Module exports
//! ├── config.rs - AppConfig and database pool creation
//! ├── state.rs  - AppState and FromRef implementations
//! └── init.rs   - create_app assembly
//! ```
//!
//! # Initialization Flow
//!
//! 1. The entry point loads `.env`, reads `AppConfig::from_env`, and
//!    initializes logging
//! 2. `create_app` connects the optional database pool and runs
//!    migrations
//! 3. The router is assembled with the shared state

/// Configuration loading
pub mod config;

/// Application state
pub mod state;

/// Server initialization
pub mod init;

pub use config::AppConfig;
pub use init::create_app;
pub use state::AppState;
