// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Free-text filter matching against category, name and comments.

use crate::models::Activity;
use crate::search::category::{CategoryCode, CategoryRegistry};
use crate::search::normalize::{normalize, normalize_opt};

/// Token that matches everything, same as an empty filter.
pub const WILDCARD: &str = "*";

/// A parsed free-text filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    normalized: String,
    /// Category the filter itself resolves to, if any
    category: Option<CategoryCode>,
}

impl SearchQuery {
    pub fn parse(filter: &str, registry: &CategoryRegistry) -> Self {
        let trimmed = filter.trim();
        if trimmed.is_empty() || trimmed == WILDCARD {
            return Self::wildcard();
        }

        let category = registry.resolve(trimmed).cloned();
        if category.is_none() {
            tracing::debug!(filter = trimmed, "Filter does not resolve to a category");
        }

        Self {
            normalized: normalize(trimmed),
            category,
        }
    }

    pub fn wildcard() -> Self {
        Self {
            normalized: String::new(),
            category: None,
        }
    }

    pub fn is_wildcard(&self) -> bool {
        self.normalized.is_empty()
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    pub fn category(&self) -> Option<&CategoryCode> {
        self.category.as_ref()
    }
}

/// Which fields of a record matched a query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldHits {
    pub category: bool,
    pub name: bool,
    pub comments: bool,
}

impl FieldHits {
    /// Evaluate a non-wildcard query against each field.
    pub fn of(activity: &Activity, query: &SearchQuery, registry: &CategoryRegistry) -> Self {
        if query.is_wildcard() {
            return Self::default();
        }

        let needle = query.normalized();
        Self {
            category: category_matches(activity.category.as_deref(), query, registry),
            name: normalize_opt(activity.name.as_deref()).contains(needle),
            comments: normalize_opt(activity.comments.as_deref()).contains(needle),
        }
    }

    pub fn any(&self) -> bool {
        self.category || self.name || self.comments
    }
}

/// Whether a record passes the filter. Wildcards match everything.
pub fn matches(activity: &Activity, query: &SearchQuery, registry: &CategoryRegistry) -> bool {
    query.is_wildcard() || FieldHits::of(activity, query, registry).any()
}

/// Fuzzy category match.
///
/// Either normalized value containing the other counts, so partially typed
/// filters ("hik") and partial labels ("SKI" vs "ski de fond") both hit.
/// Otherwise both sides must resolve to the same canonical code.
fn category_matches(
    category: Option<&str>,
    query: &SearchQuery,
    registry: &CategoryRegistry,
) -> bool {
    let Some(category) = category.map(str::trim).filter(|c| !c.is_empty()) else {
        return false;
    };

    let normalized = normalize(category);
    let needle = query.normalized();
    if normalized.contains(needle) || needle.contains(normalized.as_str()) {
        return true;
    }

    match (registry.resolve(category), query.category()) {
        (Some(record_code), Some(query_code)) => record_code == query_code,
        _ => false,
    }
}
