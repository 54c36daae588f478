//! Standalone REST API server binary.
//!
//! ## Purpose
//! Runs the briefings REST API on its own, useful for development and
//! debugging. The workspace's main `briefgen-run` binary is the usual
//! entry point.

use briefgen_api::{router, ApiConfig, AppState};
use briefgen_core::audit::log_mapping_drift;
use briefgen_core::questionnaire::QUESTIONNAIRES;
use briefgen_storage::{BriefingStore, MemoryStore, RedisStore};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the Briefgen REST API server.
///
/// # Environment Variables
/// - `BRIEFGEN_REST_ADDR`: server address (default: "0.0.0.0:3000")
/// - `REDIS_URL`: Redis connection URL; without it an in-memory store is
///   used (development only, nothing survives a restart)
/// - `API_KEY`: shared secret for write access
///
/// # Errors
/// Returns an error if the logging configuration cannot be initialised,
/// the Redis client cannot be constructed, the address cannot be bound,
/// or the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("briefgen_api=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("BRIEFGEN_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    tracing::info!("-- Starting Briefgen REST API on {}", addr);

    // Surface normalizer entries that reference questions no template
    // declares; the questionnaire definitions are ground truth.
    for questionnaire in QUESTIONNAIRES {
        log_mapping_drift(questionnaire);
    }

    let store: Arc<dyn BriefingStore> = match std::env::var("REDIS_URL") {
        Ok(url) => Arc::new(RedisStore::new(&url)?),
        Err(_) => {
            tracing::warn!("REDIS_URL not set, using in-memory store (data is not persisted)");
            Arc::new(MemoryStore::new())
        }
    };

    let api_key = std::env::var("API_KEY").ok();
    if api_key.is_none() {
        tracing::error!("API_KEY not set, protected routes will answer 500");
    }

    let state = AppState {
        store,
        config: Arc::new(ApiConfig { api_key }),
    };

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router(state)).await?;

    Ok(())
}
