mod config;
mod errors;
mod gemini;
mod models;
mod routes;
mod screening;
mod state;
mod store;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::gemini::GeminiClient;
use crate::models::candidate::Settings;
use crate::routes::build_router;
use crate::screening::demo::seed_demo_candidates;
use crate::state::AppState;
use crate::store::SessionStore;

#[tokio::main]
async fn main() -> Result<()> {
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

    info!("Starting ResumeRank API v{}", env!("CARGO_PKG_VERSION"));

    // Session state lives exactly as long as the process; nothing persists.
    let store = Arc::new(SessionStore::new(Settings {
        api_key: config.gemini_api_key.clone(),
        model: config.default_model.clone(),
    }));
    if config.seed_demo_data {
        let seeded = seed_demo_candidates(20);
        info!("Seeding {} demo candidates", seeded.len());
        for candidate in seeded {
            store.add_candidate(candidate);
        }
    }

    let provider = Arc::new(GeminiClient::new());
    info!("Gemini client initialized (default model: {})", config.default_model);

    let state = AppState { store, provider };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // browser dashboard talks to us directly

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
