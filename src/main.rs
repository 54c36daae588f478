//! Main entry point for the Briefgen service.
//!
//! Boots logging and configuration, connects the briefing store, and
//! serves the REST API.

use briefgen_api::{router, ApiConfig, AppState};
use briefgen_core::audit::log_mapping_drift;
use briefgen_core::questionnaire::QUESTIONNAIRES;
use briefgen_storage::{BriefingStore, MemoryStore, RedisStore};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Starts the Briefgen REST server.
///
/// # Environment Variables
/// - `BRIEFGEN_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `REDIS_URL`: Redis connection URL for briefing storage
/// - `API_KEY`: shared secret required for write access
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If startup or runtime fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("briefgen=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr = std::env::var("BRIEFGEN_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    tracing::info!("++ Starting Briefgen REST on {}", rest_addr);

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

    let listener = tokio::net::TcpListener::bind(&rest_addr).await?;
    axum::serve(listener, router(state)).await?;

    Ok(())
}
