// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore integration tests.
//!
//! These tests require the Firestore emulator to be running.
//! Run with: FIRESTORE_EMULATOR_HOST=localhost:8081 cargo test
//!
//! Each test uses unique IDs so runs do not interfere with each other.

use activity_search::db::ActivityStore;
use activity_search::models::{Activity, OwnerRef, Visibility};
use activity_search::search::{AccessPredicate, SearchEngine};
use activity_search::services::SearchService;
use std::time::Duration;

mod common;
use common::{parse_time, test_db};

/// Generate a unique suffix for test isolation.
fn unique_suffix() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos()
        .to_string()
}

fn test_activity(id: &str, visibility: Visibility, owner: Option<OwnerRef>) -> Activity {
    Activity {
        id: id.to_string(),
        name: Some(format!("Activity {}", id)),
        category: Some("HIKE".to_string()),
        comments: Some("Foggy ridge".to_string()),
        begin: Some(parse_time("2024-01-15T10:00:00Z")),
        visibility,
        owner,
    }
}

fn ids(activities: &[Activity]) -> Vec<&str> {
    activities.iter().map(|a| a.id.as_str()).collect()
}

#[tokio::test]
async fn test_activity_roundtrip() {
    require_emulator!();

    let db = test_db().await;
    let id = format!("roundtrip-{}", unique_suffix());
    let activity = test_activity(&id, Visibility::Private, Some(OwnerRef::LinkedId("u1".into())));

    assert!(db.get_activity(&id).await.unwrap().is_none());

    db.set_activity(&activity).await.unwrap();
    let fetched = db.get_activity(&id).await.unwrap().expect("activity stored");
    assert_eq!(fetched, activity);

    db.delete_activity(&id).await.unwrap();
    assert!(db.get_activity(&id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_visibility_query_handles_both_owner_encodings() {
    require_emulator!();

    let db = test_db().await;
    let suffix = unique_suffix();
    let owner = format!("owner-{}", suffix);
    let stranger = format!("stranger-{}", suffix);

    let direct = test_activity(
        &format!("direct-{}", suffix),
        Visibility::Private,
        Some(OwnerRef::DirectId(owner.clone())),
    );
    let linked = test_activity(
        &format!("linked-{}", suffix),
        Visibility::Private,
        Some(OwnerRef::LinkedId(owner.clone())),
    );
    let foreign = test_activity(
        &format!("foreign-{}", suffix),
        Visibility::Private,
        Some(OwnerRef::DirectId(stranger.clone())),
    );
    for activity in [&direct, &linked, &foreign] {
        db.set_activity(activity).await.unwrap();
    }

    let visible = db
        .find_visible_activities(&AccessPredicate::for_caller(Some(&owner)))
        .await
        .unwrap();
    let visible_ids = ids(&visible);
    assert!(visible_ids.contains(&direct.id.as_str()));
    assert!(visible_ids.contains(&linked.id.as_str()));
    assert!(!visible_ids.contains(&foreign.id.as_str()));

    let anonymous = db
        .find_visible_activities(&AccessPredicate::public_only())
        .await
        .unwrap();
    assert!(!ids(&anonymous).contains(&direct.id.as_str()));

    for activity in [&direct, &linked, &foreign] {
        db.delete_activity(&activity.id).await.unwrap();
    }
}

#[tokio::test]
async fn test_search_over_firestore() {
    require_emulator!();

    let db = test_db().await;
    let suffix = unique_suffix();
    let owner = format!("owner-{}", suffix);

    let mine = test_activity(
        &format!("mine-{}", suffix),
        Visibility::Private,
        Some(OwnerRef::DirectId(owner.clone())),
    );
    db.set_activity(&mine).await.unwrap();

    let service = SearchService::new(
        ActivityStore::Firestore(db.clone()),
        SearchEngine::builtin(),
        Duration::from_secs(10),
    );

    let page = service
        .search("randonnée", Some(&owner), 0, 100)
        .await
        .unwrap();
    assert!(ids(&page.items).contains(&mine.id.as_str()));

    db.delete_activity(&mine.id).await.unwrap();
}
