// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Category dictionary routes (public).

use crate::error::{AppError, Result};
use crate::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/categories", get(list_categories))
        .route("/api/categories/resolve", get(resolve_category))
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CategorySummary {
    pub code: String,
    pub label: String,
    pub aliases: Vec<String>,
    pub keywords: Vec<String>,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CategoriesResponse {
    pub categories: Vec<CategorySummary>,
}

/// List canonical categories with their registered forms.
async fn list_categories(State(state): State<Arc<AppState>>) -> Json<CategoriesResponse> {
    let categories = state
        .search_service
        .registry()
        .categories()
        .iter()
        .map(|c| CategorySummary {
            code: c.code.to_string(),
            label: c.label.clone(),
            aliases: c.aliases.clone(),
            keywords: c.keywords.clone(),
        })
        .collect();

    Json(CategoriesResponse { categories })
}

#[derive(Deserialize)]
struct ResolveQuery {
    value: String,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ResolveResponse {
    pub value: String,
    /// Canonical code, or null when the value is not a known alias
    pub code: Option<String>,
}

/// Resolve any label or keyword to its canonical code.
async fn resolve_category(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ResolveQuery>,
) -> Result<Json<ResolveResponse>> {
    if params.value.chars().count() > 100 {
        return Err(AppError::BadRequest(
            "'value' must be at most 100 characters".to_string(),
        ));
    }

    let code = state
        .search_service
        .registry()
        .resolve(&params.value)
        .map(|c| c.to_string());

    if code.is_none() {
        tracing::debug!(value = %params.value, "Unresolvable category value");
    }

    Ok(Json(ResolveResponse {
        value: params.value,
        code,
    }))
}
