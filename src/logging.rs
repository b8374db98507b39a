/**
 * Logging Initialization
 *
 * This module configures the process-wide tracing subscriber.
 *
 * # Sinks
 *
 * - Console: human-readable fmt layer, always on
 * - File: JSON layer appended to `LOG_FILE` when configured
 *
 * Filtering comes from `RUST_LOG` with an `info` default. Initialization
 * is idempotent; repeated calls become no-ops.
 */

use std::fs::OpenOptions;
use std::sync::Arc;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::server::config::AppConfig;

/// Initialize tracing for the process
///
/// # Arguments
///
/// * `config` - configuration carrying the optional log file path
pub fn init(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer());

    match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path);
            match file {
                Ok(file) => {
                    let _ = registry
                        .with(fmt::layer().json().with_writer(Arc::new(file)).with_ansi(false))
                        .try_init();
                }
                Err(e) => {
                    let _ = registry.try_init();
                    tracing::error!("failed to open log file {:?}: {}", path, e);
                }
            }
        }
        None => {
            let _ = registry.try_init();
        }
    }
}
