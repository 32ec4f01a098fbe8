//! User Registry Web Library
//!
//! This crate provides the HTTP layer over the user registry: an HTML
//! listing page, a path-parameter CRUD API, a JSON CRUD API and OpenAPI docs.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;
pub mod views;

use std::net::SocketAddr;

use tracing::info;

use crate::config::RegistryConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Run the HTTP server with the given configuration.
///
/// The user registry is created here and dropped when the server stops.
pub async fn run_server(config: RegistryConfig) -> Result<(), Box<dyn std::error::Error>> {
    let addr: SocketAddr = config.server_addr().parse()?;

    // Create app state
    let state = AppState::in_memory(config);
    info!(
        service = %state.config.service.service_name,
        seeded = state.config.seed_users,
        "User registry initialized"
    );

    // Build router
    let app = create_router(state);

    info!("User registry listening on http://{}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("User registry stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
