mod config;
mod dates;
mod errors;
mod extract;
mod generators;
mod ip_lookup;
mod json_tools;
mod llm_client;
mod resume;
mod roman;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::ip_lookup::HttpIpLookup;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Toolshed API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let llm = LlmClient::new(config.anthropic_api_key.clone())
        .context("Failed to build LLM HTTP client")?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Initialize IP lookup backend
    let ip_lookup = HttpIpLookup::new(config.ip_lookup_url.clone())
        .context("Failed to build IP lookup HTTP client")?;
    info!("IP lookup initialized ({})", config.ip_lookup_url);

    info!("Default date locale: {}", config.default_locale.tag());

    // Build app state
    let state = AppState {
        llm,
        config: config.clone(),
        ip_lookup: Arc::new(ip_lookup),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
