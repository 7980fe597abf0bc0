// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Field-weighted relevance scoring.

use crate::models::Activity;
use crate::search::category::CategoryRegistry;
use crate::search::matcher::{FieldHits, SearchQuery};

/// Category is chosen by the user at creation time: the strongest signal.
pub const CATEGORY_WEIGHT: u32 = 400;
pub const NAME_WEIGHT: u32 = 200;
/// Free-text comments are the noisiest field.
pub const COMMENTS_WEIGHT: u32 = 100;

/// An activity paired with its score for one search call.
#[derive(Debug, Clone)]
pub struct ScoredActivity {
    pub activity: Activity,
    pub score: u32,
    /// Lower-cased name, precomputed for ordering
    pub sort_name: Option<String>,
}

impl ScoredActivity {
    pub fn new(activity: Activity, score: u32) -> Self {
        let sort_name = activity.name.as_deref().map(str::to_lowercase);
        Self {
            activity,
            score,
            sort_name,
        }
    }
}

impl FieldHits {
    /// Additive score over the matched fields.
    pub fn score(&self) -> u32 {
        let mut score = 0;
        if self.category {
            score += CATEGORY_WEIGHT;
        }
        if self.name {
            score += NAME_WEIGHT;
        }
        if self.comments {
            score += COMMENTS_WEIGHT;
        }
        score
    }
}

/// Score one record. Wildcard queries score 0.
pub fn score(activity: &Activity, query: &SearchQuery, registry: &CategoryRegistry) -> u32 {
    FieldHits::of(activity, query, registry).score()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hike() -> Activity {
        let mut activity = Activity::new("a1");
        activity.name = Some("Hike up Mount Tam".to_string());
        activity.category = Some("HIKE".to_string());
        activity.comments = Some("Great hike, foggy summit".to_string());
        activity
    }

    #[test]
    fn test_all_fields_score_700() {
        let registry = CategoryRegistry::builtin();
        let query = SearchQuery::parse("hike", &registry);

        assert_eq!(score(&hike(), &query, &registry), 700);
    }

    #[test]
    fn test_weights_are_additive() {
        let registry = CategoryRegistry::builtin();
        let activity = hike();

        assert_eq!(score(&activity, &SearchQuery::parse("foggy", &registry), &registry), 100);
        assert_eq!(score(&activity, &SearchQuery::parse("tam", &registry), &registry), 200);
        assert_eq!(score(&activity, &SearchQuery::parse("trek", &registry), &registry), 400);
        assert_eq!(score(&activity, &SearchQuery::parse("mount", &registry), &registry), 200);
    }

    #[test]
    fn test_wildcard_scores_zero() {
        let registry = CategoryRegistry::builtin();

        assert_eq!(score(&hike(), &SearchQuery::wildcard(), &registry), 0);
        assert_eq!(score(&hike(), &SearchQuery::parse("*", &registry), &registry), 0);
    }

    #[test]
    fn test_field_hits_score() {
        let hits = FieldHits {
            category: true,
            name: false,
            comments: true,
        };
        assert_eq!(hits.score(), 500);
        assert_eq!(FieldHits::default().score(), 0);
    }
}
