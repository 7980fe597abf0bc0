// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity store backends (Firestore and in-memory).

pub mod firestore;
pub mod memory;

pub use firestore::FirestoreDb;
pub use memory::MemoryStore;

use crate::models::Activity;
use crate::search::AccessPredicate;

/// Collection names as constants.
pub mod collections {
    pub const ACTIVITIES: &str = "activities";
}

/// Errors from a store backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database not connected (offline mode)")]
    Offline,

    #[error("Firestore error: {0}")]
    Firestore(String),

    #[error("Failed to load seed data: {0}")]
    Seed(String),
}

/// The backing collection searched by the API.
#[derive(Clone)]
pub enum ActivityStore {
    Firestore(FirestoreDb),
    Memory(MemoryStore),
}

impl ActivityStore {
    /// All activities the predicate admits, in no particular order.
    pub async fn find_visible(
        &self,
        predicate: &AccessPredicate,
    ) -> Result<Vec<Activity>, StoreError> {
        match self {
            ActivityStore::Firestore(db) => db.find_visible_activities(predicate).await,
            ActivityStore::Memory(store) => Ok(store.find_visible(predicate)),
        }
    }

    pub fn backend_name(&self) -> &'static str {
        match self {
            ActivityStore::Firestore(_) => "firestore",
            ActivityStore::Memory(_) => "memory",
        }
    }
}
