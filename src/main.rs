//! Guia Ilhéus - WhatsApp business directory assistant
//!
//! A Rust backend implementing a menu-driven conversation flow that
//! searches the city business directory and replies through a
//! WPPConnect gateway.

mod api;
mod conversation;
mod directory;
mod messages;
mod runtime;
mod store;
mod wpp;

use api::{create_router, AppState};
use directory::{DirectoryConfig, HttpDirectoryClient};
use runtime::Engine;
use std::net::SocketAddr;
use std::sync::Arc;
use store::SessionStore;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wpp::{WppConfig, WppGateway};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "guia_ilheus=info,tower_http=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false),
        )
        .init();

    // Configuration
    let port: u16 = std::env::var("GUIA_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);

    let directory_config = DirectoryConfig::from_env();
    tracing::info!(url = %directory_config.base_url, "Using business directory API");

    let wpp_config = WppConfig::from_env();
    tracing::info!(
        url = %wpp_config.base_url,
        session = %wpp_config.session,
        "Using WPPConnect gateway"
    );

    // Create application state
    let store = Arc::new(SessionStore::new());
    let directory = Arc::new(HttpDirectoryClient::new(directory_config));
    let outbound = Arc::new(WppGateway::new(wpp_config));
    let engine = Engine::new(store, directory, outbound);
    let state = AppState::new(engine);

    // Create router
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = create_router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Guia Ilhéus server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
