// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Read-visibility predicate.

use crate::models::{Activity, Visibility};

/// Which activities a caller may read: public ones, plus their own.
///
/// Store backends evaluate this once per search call, either in memory via
/// [`allows`](Self::allows) or by translating it into a native query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessPredicate {
    user_id: Option<String>,
}

impl AccessPredicate {
    /// Predicate for a caller; `None` means anonymous.
    ///
    /// A blank user ID is treated as anonymous.
    pub fn for_caller(user_id: Option<&str>) -> Self {
        let user_id = user_id
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string);
        Self { user_id }
    }

    /// Anonymous callers only see public records.
    pub fn public_only() -> Self {
        Self { user_id: None }
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn allows(&self, activity: &Activity) -> bool {
        if activity.visibility == Visibility::Public {
            return true;
        }

        match &self.user_id {
            Some(user_id) => activity.is_owned_by(user_id),
            None => false,
        }
    }
}
