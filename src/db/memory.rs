// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory activity store for local development and tests.

use crate::db::StoreError;
use crate::models::Activity;
use crate::search::AccessPredicate;
use dashmap::DashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Activities keyed by ID. Clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    activities: Arc<DashMap<String, Activity>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_activities(activities: impl IntoIterator<Item = Activity>) -> Self {
        let store = Self::new();
        for activity in activities {
            store.upsert(activity);
        }
        store
    }

    /// Load a JSON array of activities.
    pub fn load_seed_file<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let json_data =
            fs::read_to_string(path.as_ref()).map_err(|e| StoreError::Seed(e.to_string()))?;
        Self::load_seed_json(&json_data)
    }

    pub fn load_seed_json(json_data: &str) -> Result<Self, StoreError> {
        let activities: Vec<Activity> =
            serde_json::from_str(json_data).map_err(|e| StoreError::Seed(e.to_string()))?;

        tracing::info!(count = activities.len(), "Loaded seed activities");
        Ok(Self::with_activities(activities))
    }

    /// Insert or replace an activity.
    pub fn upsert(&self, activity: Activity) {
        self.activities.insert(activity.id.clone(), activity);
    }

    pub fn remove(&self, id: &str) -> Option<Activity> {
        self.activities.remove(id).map(|(_, activity)| activity)
    }

    pub fn get(&self, id: &str) -> Option<Activity> {
        self.activities.get(id).map(|entry| entry.value().clone())
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Snapshot of the activities the predicate admits.
    pub fn find_visible(&self, predicate: &AccessPredicate) -> Vec<Activity> {
        self.activities
            .iter()
            .filter(|entry| predicate.allows(entry.value()))
            .map(|entry| entry.value().clone())
            .collect()
    }
}
