// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Multilingual, access-filtered activity search.
//!
//! The pipeline for one call:
//! 1. The store returns the records the caller may read ([`AccessPredicate`])
//! 2. Non-matching records are dropped ([`matcher`])
//! 3. Each record is scored ([`scoring`])
//! 4. Results are put in a total order ([`ordering`])
//! 5. The requested page is sliced out ([`paginate`])
//!
//! Everything here is synchronous and request-local; the only shared state
//! is the immutable [`CategoryRegistry`].

pub mod access;
pub mod catalog;
pub mod category;
pub mod matcher;
pub mod normalize;
pub mod ordering;
pub mod paginate;
pub mod scoring;

pub use access::AccessPredicate;
pub use category::{Category, CategoryCode, CategoryRegistry, CategoryRegistryBuilder};
pub use matcher::{FieldHits, SearchQuery};
pub use normalize::normalize;
pub use scoring::ScoredActivity;

use crate::db::StoreError;
use crate::models::{Activity, Page, PageRequest};
use std::sync::Arc;
use std::time::Instant;

/// Errors from a search call.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Activity store unavailable: {0}")]
    UpstreamUnavailable(#[from] StoreError),

    #[error("Search deadline exceeded before {0}")]
    DeadlineExceeded(&'static str),
}

/// Ranks an already access-filtered record set.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    registry: Arc<CategoryRegistry>,
}

impl SearchEngine {
    pub fn new(registry: Arc<CategoryRegistry>) -> Self {
        Self { registry }
    }

    /// Engine over the built-in category dictionary.
    pub fn builtin() -> Self {
        Self::new(Arc::new(CategoryRegistry::builtin()))
    }

    pub fn registry(&self) -> &CategoryRegistry {
        &self.registry
    }

    pub fn parse_query(&self, filter: &str) -> SearchQuery {
        SearchQuery::parse(filter, &self.registry)
    }

    /// Filter, score, order and paginate `activities`.
    ///
    /// `deadline` is checked between stages; once it has passed the call is
    /// abandoned with [`SearchError::DeadlineExceeded`].
    pub fn rank(
        &self,
        activities: Vec<Activity>,
        query: &SearchQuery,
        request: PageRequest,
        deadline: Option<Instant>,
    ) -> Result<Page<Activity>, SearchError> {
        let eligible = activities.len();

        check_deadline(deadline, "matching")?;
        let matched: Vec<(Activity, FieldHits)> = activities
            .into_iter()
            .filter_map(|activity| {
                let hits = FieldHits::of(&activity, query, &self.registry);
                (query.is_wildcard() || hits.any()).then_some((activity, hits))
            })
            .collect();

        check_deadline(deadline, "scoring")?;
        let mut scored: Vec<ScoredActivity> = matched
            .into_iter()
            .map(|(activity, hits)| ScoredActivity::new(activity, hits.score()))
            .collect();

        check_deadline(deadline, "ordering")?;
        ordering::sort(&mut scored);

        tracing::debug!(
            eligible,
            matched = scored.len(),
            page = request.page,
            size = request.size,
            "Ranked activities"
        );

        let page = paginate::paginate(scored, request);
        Ok(page.map(|scored| scored.activity))
    }
}

fn check_deadline(deadline: Option<Instant>, stage: &'static str) -> Result<(), SearchError> {
    match deadline {
        Some(deadline) if Instant::now() >= deadline => {
            tracing::warn!(stage, "Search deadline exceeded");
            Err(SearchError::DeadlineExceeded(stage))
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Visibility;
    use chrono::{TimeZone, Utc};

    fn activity(id: &str, name: &str, category: &str, day: u32) -> Activity {
        let mut activity = Activity::new(id);
        activity.name = Some(name.to_string());
        activity.category = Some(category.to_string());
        activity.begin = Some(Utc.with_ymd_and_hms(2024, 5, day, 8, 0, 0).unwrap());
        activity.visibility = Visibility::Public;
        activity
    }

    fn collection() -> Vec<Activity> {
        vec![
            activity("a", "Morning Run", "RUN", 1),
            activity("b", "Col du Galibier", "VELO", 3),
            activity("c", "Trail run in the rain", "TRAIL", 2),
            activity("d", "Lake loop", "WALK", 2),
        ]
    }

    #[test]
    fn test_wildcard_keeps_everything_by_date() {
        let engine = SearchEngine::builtin();
        let page = engine
            .rank(
                collection(),
                &engine.parse_query(""),
                PageRequest::new(0, 10).unwrap(),
                None,
            )
            .unwrap();

        let ids: Vec<&str> = page.items.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "d", "c", "a"]);
        assert_eq!(page.total, 4);
    }

    #[test]
    fn test_filter_then_rank() {
        let engine = SearchEngine::builtin();
        let page = engine
            .rank(
                collection(),
                &engine.parse_query("run"),
                PageRequest::new(0, 10).unwrap(),
                None,
            )
            .unwrap();

        let ids: Vec<&str> = page.items.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a"]);
        assert_eq!(page.total, 2);
    }

    #[test]
    fn test_same_input_same_output() {
        let engine = SearchEngine::builtin();
        let query = engine.parse_query("r");
        let request = PageRequest::new(0, 10).unwrap();

        let first = engine.rank(collection(), &query, request, None).unwrap();
        let mut shuffled = collection();
        shuffled.reverse();
        let second = engine.rank(shuffled, &query, request, None).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_expired_deadline_aborts() {
        let engine = SearchEngine::builtin();
        let result = engine.rank(
            collection(),
            &engine.parse_query("run"),
            PageRequest::new(0, 10).unwrap(),
            Some(Instant::now()),
        );

        assert!(matches!(result, Err(SearchError::DeadlineExceeded("matching"))));
    }
}
