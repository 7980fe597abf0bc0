// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Activity search: multilingual, access-filtered activity listing
//!
//! This crate provides the backend API that lists a user's visible
//! activities, filtered by a free-text query and ranked by relevance.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod search;
pub mod services;
pub mod time_utils;

use config::Config;
use services::SearchService;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub search_service: SearchService,
}
