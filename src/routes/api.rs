// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity listing API.

use crate::error::{AppError, Result};
use crate::middleware::Caller;
use crate::models::Activity;
use crate::search::CategoryRegistry;
use crate::time_utils::format_utc_rfc3339;
use crate::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

/// Activity routes. Caller identification is applied in routes/mod.rs.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/activities", get(get_activities))
}

#[derive(Deserialize, Validate)]
struct ActivitiesQuery {
    /// Free-text filter; empty or "*" lists everything (max 200 chars)
    #[serde(default)]
    #[validate(length(max = 200))]
    filter: String,
    /// Pagination: page number (0-indexed)
    #[serde(default)]
    page: i64,
    /// Pagination: items per page
    size: Option<i64>,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ActivitiesResponse {
    pub activities: Vec<ActivitySummary>,
    /// Total number of activities matching the query.
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub total: usize,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub page: usize,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub size: usize,
}

#[derive(Serialize, Clone, Debug)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ActivitySummary {
    pub id: String,
    pub name: Option<String>,
    pub category: Option<String>,
    /// Canonical code the category resolves to, if any
    pub category_code: Option<String>,
    pub comments: Option<String>,
    pub begin: Option<String>,
    pub visibility: String,
}

impl ActivitySummary {
    fn from_activity(activity: Activity, registry: &CategoryRegistry) -> Self {
        let category_code = activity
            .category
            .as_deref()
            .and_then(|c| registry.resolve(c))
            .map(|code| code.to_string());

        Self {
            id: activity.id,
            name: activity.name,
            category: activity.category,
            category_code,
            comments: activity.comments,
            begin: activity.begin.map(format_utc_rfc3339),
            visibility: activity.visibility.as_str().to_string(),
        }
    }
}

/// List activities visible to the caller, filtered and ranked.
async fn get_activities(
    State(state): State<Arc<AppState>>,
    Extension(caller): Extension<Caller>,
    Query(params): Query<ActivitiesQuery>,
) -> Result<Json<ActivitiesResponse>> {
    params
        .validate()
        .map_err(|e| AppError::BadRequest(format!("Invalid query: {}", e)))?;

    let max_size = i64::from(state.config.max_page_size);
    let size = params
        .size
        .unwrap_or_else(|| i64::from(state.config.default_page_size))
        .min(max_size);

    tracing::debug!(
        user_id = ?caller.user_id(),
        filter = %params.filter,
        page = params.page,
        size,
        "Fetching activities"
    );

    let search = &state.search_service;
    let page = search
        .search(&params.filter, caller.user_id(), params.page, size)
        .await?;

    let registry = search.registry();
    let page = page.map(|activity| ActivitySummary::from_activity(activity, registry));

    Ok(Json(ActivitiesResponse {
        activities: page.items,
        total: page.total,
        page: page.page,
        size: page.size,
    }))
}
