/**
 * Authbase Server Entry Point
 *
 * This is the main entry point for the authbase backend server. It
 * loads configuration, initializes logging, and serves the Axum app.
 */

use authbase::logging;
use authbase::server::{create_app, AppConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let config = AppConfig::from_env();
    logging::init(&config);

    tracing::info!("server initialization started");

    let port = config.port;
    let app = create_app(config).await;

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
