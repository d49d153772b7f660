//! Main entry point for the health analysis REST server.
//!
//! Binds the REST API over a fresh in-memory registry. The registry lives for
//! the lifetime of the process; restarting the server starts a new session
//! with no stored records.

use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{build_router, AppState};

/// Starts the REST server on the configured address.
///
/// # Environment Variables
/// - `HEALTH_REST_ADDR`: server address (default: "0.0.0.0:3000")
/// - `HEALTH_CONDITIONS_FILE`: conditions catalogue document
///   (default: "health_analysis.json")
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("HEALTH_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let conditions_file = std::env::var("HEALTH_CONDITIONS_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("health_analysis.json"));

    tracing::info!("++ Starting health analysis REST on {}", addr);
    tracing::info!("++ Conditions catalogue: {}", conditions_file.display());

    let app = build_router(AppState::new(conditions_file));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
