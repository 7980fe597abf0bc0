// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use activity_search::config::Config;
use activity_search::db::{ActivityStore, FirestoreDb, MemoryStore};
use activity_search::middleware::auth::create_jwt;
use activity_search::models::{Activity, OwnerRef, Visibility};
use activity_search::routes::create_router;
use activity_search::search::SearchEngine;
use activity_search::services::SearchService;
use activity_search::AppState;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Duration;

/// Check if emulator is available via environment variable.
#[allow(dead_code)]
pub fn emulator_available() -> bool {
    std::env::var("FIRESTORE_EMULATOR_HOST").is_ok()
}

/// Skip test with message if emulator not available.
#[macro_export]
macro_rules! require_emulator {
    () => {
        if !crate::common::emulator_available() {
            eprintln!("⚠️  Skipping: FIRESTORE_EMULATOR_HOST not set");
            return;
        }
    };
}

/// Create a test database connection.
#[allow(dead_code)]
pub async fn test_db() -> FirestoreDb {
    FirestoreDb::new("test-project")
        .await
        .expect("Failed to connect to Firestore emulator")
}

/// Parse an RFC3339 timestamp.
#[allow(dead_code)]
pub fn parse_time(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(raw)
        .expect("valid RFC3339")
        .with_timezone(&Utc)
}

/// Build an activity fixture.
#[allow(dead_code)]
pub fn activity(
    id: &str,
    name: &str,
    category: &str,
    begin: Option<&str>,
    visibility: Visibility,
    owner: Option<OwnerRef>,
) -> Activity {
    Activity {
        id: id.to_string(),
        name: Some(name.to_string()),
        category: Some(category.to_string()),
        comments: None,
        begin: begin.map(parse_time),
        visibility,
        owner,
    }
}

/// The two-record collection used by the end-to-end scenarios.
#[allow(dead_code)]
pub fn run_and_walk() -> Vec<Activity> {
    vec![
        activity(
            "run",
            "Morning Run",
            "RUN",
            Some("2024-05-01T07:00:00Z"),
            Visibility::Public,
            None,
        ),
        activity(
            "walk",
            "Evening Walk",
            "WALK",
            Some("2024-05-02T19:00:00Z"),
            Visibility::Private,
            Some(OwnerRef::DirectId("u1".to_string())),
        ),
    ]
}

/// Search service over an in-memory store.
#[allow(dead_code)]
pub fn memory_service(activities: Vec<Activity>) -> SearchService {
    SearchService::new(
        ActivityStore::Memory(MemoryStore::with_activities(activities)),
        SearchEngine::builtin(),
        Duration::from_secs(5),
    )
}

/// Create a test app over an in-memory store.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app(activities: Vec<Activity>) -> (axum::Router, Arc<AppState>) {
    create_app_with_timeout(activities, Duration::from_secs(5))
}

/// Create a test app whose searches run under the given deadline.
#[allow(dead_code)]
pub fn create_app_with_timeout(
    activities: Vec<Activity>,
    timeout: Duration,
) -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState {
        config: Config::default(),
        search_service: SearchService::new(
            ActivityStore::Memory(MemoryStore::with_activities(activities)),
            SearchEngine::builtin(),
            timeout,
        ),
    });

    (create_router(state.clone()), state)
}

/// Create a test app whose store is offline (every read fails).
#[allow(dead_code)]
pub fn create_offline_app() -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState {
        config: Config::default(),
        search_service: SearchService::new(
            ActivityStore::Firestore(FirestoreDb::new_mock()),
            SearchEngine::builtin(),
            Duration::from_secs(5),
        ),
    });

    (create_router(state.clone()), state)
}

/// Create a session token for a user.
#[allow(dead_code)]
pub fn create_test_jwt(user_id: &str, signing_key: &[u8]) -> String {
    create_jwt(user_id, signing_key).expect("Failed to create JWT")
}
