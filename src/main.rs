// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity Search API Server
//!
//! Serves the paginated, relevance-ranked activity listing on top of
//! Firestore (production) or an in-memory store (local development).

use activity_search::{
    config::{Config, StoreBackend},
    db::{ActivityStore, FirestoreDb, MemoryStore},
    search::{CategoryRegistry, SearchEngine},
    services::SearchService,
    AppState,
};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging for GCP
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(port = config.port, "Starting Activity Search API");

    // Build the category dictionary once; it is read-only from here on
    let registry = Arc::new(CategoryRegistry::builtin());
    tracing::info!(
        categories = registry.categories().len(),
        aliases = registry.alias_count(),
        "Category registry loaded"
    );

    let store = match config.store_backend {
        StoreBackend::Firestore => {
            let db = FirestoreDb::new(&config.gcp_project_id)
                .await
                .expect("Failed to connect to Firestore");
            ActivityStore::Firestore(db)
        }
        StoreBackend::Memory => {
            let store = match &config.seed_file {
                Some(path) => {
                    tracing::info!(path = %path, "Loading seed activities");
                    MemoryStore::load_seed_file(path).expect("Failed to load seed activities")
                }
                None => MemoryStore::new(),
            };
            ActivityStore::Memory(store)
        }
    };
    tracing::info!(backend = store.backend_name(), "Activity store ready");

    let search_service = SearchService::new(
        store,
        SearchEngine::new(registry),
        Duration::from_millis(config.search_timeout_ms),
    );

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        search_service,
    });

    // Build router
    let app = activity_search::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging (GCP-compliant).
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("activity_search=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
