//! FairScale HTTP Server Binary
//!
//! This is the main entry point for the FairScale REST API server.
//! It loads the weight profile, sets up the HTTP router, and starts
//! serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin fairscale-server
//!
//! # With a custom weight profile
//! FAIRSCALE_CONFIG=fairscale.toml cargo run --bin fairscale-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `FAIRSCALE_CONFIG`: Path to a TOML file with weight coefficients
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use fairscale::config::WeightProfile;
use fairscale::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting FairScale HTTP Server");

    // Resolve the weight profile once; it stays fixed for the process lifetime
    let profile = WeightProfile::from_env_or_default()?;
    info!(
        "Weight profile: preparation_gap={} syllabus_size={} exam_weight={} ease={}",
        profile.preparation_gap, profile.syllabus_size, profile.exam_weight, profile.ease
    );

    // Create application state
    let state = AppState::new(profile);

    // Create router with all endpoints
    let app = create_router(state);

    // Determine bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
