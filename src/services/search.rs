// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity search service.
//!
//! Ties the store to the ranking pipeline:
//! 1. Validate the page request
//! 2. Fetch the records the caller may read
//! 3. Filter, score, order and slice them

use crate::db::ActivityStore;
use crate::models::{Activity, Page, PageRequest};
use crate::search::{AccessPredicate, CategoryRegistry, SearchEngine, SearchError};
use std::time::{Duration, Instant};

/// Search over the activity store.
#[derive(Clone)]
pub struct SearchService {
    store: ActivityStore,
    engine: SearchEngine,
    timeout: Duration,
}

impl SearchService {
    pub fn new(store: ActivityStore, engine: SearchEngine, timeout: Duration) -> Self {
        Self {
            store,
            engine,
            timeout,
        }
    }

    pub fn registry(&self) -> &CategoryRegistry {
        self.engine.registry()
    }

    pub fn store(&self) -> &ActivityStore {
        &self.store
    }

    /// Search activities visible to `user_id` (anonymous if `None`).
    ///
    /// `page` is 0-based. `size` must be positive and `page` non-negative;
    /// both are checked before the store is touched. Store failures are
    /// returned as [`SearchError::UpstreamUnavailable`] without retrying.
    pub async fn search(
        &self,
        filter: &str,
        user_id: Option<&str>,
        page: i64,
        size: i64,
    ) -> Result<Page<Activity>, SearchError> {
        let request = PageRequest::new(page, size)?;
        let deadline = Instant::now().checked_add(self.timeout);

        let predicate = AccessPredicate::for_caller(user_id);
        let query = self.engine.parse_query(filter);

        tracing::debug!(
            filter,
            authenticated = predicate.user_id().is_some(),
            wildcard = query.is_wildcard(),
            category = ?query.category(),
            page = request.page,
            size = request.size,
            "Searching activities"
        );

        let activities = self.store.find_visible(&predicate).await.map_err(|e| {
            tracing::error!(
                error = %e,
                backend = self.store.backend_name(),
                "Activity store unavailable"
            );
            SearchError::from(e)
        })?;

        self.engine.rank(activities, &query, request, deadline)
    }
}
