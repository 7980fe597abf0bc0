// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Deterministic result ordering.

use crate::search::scoring::ScoredActivity;
use std::cmp::Ordering;

/// Total order over scored activities:
///
/// 1. begin date, newest first, missing dates last
/// 2. score, highest first
/// 3. name, case-insensitive ascending, missing names last
/// 4. id ascending
pub fn compare(a: &ScoredActivity, b: &ScoredActivity) -> Ordering {
    newest_first(a, b)
        .then_with(|| b.score.cmp(&a.score))
        .then_with(|| name_ascending(a, b))
        .then_with(|| a.activity.id.cmp(&b.activity.id))
}

/// Sort in place. Stable, and total thanks to the id tie-breaker.
pub fn sort(results: &mut [ScoredActivity]) {
    results.sort_by(compare);
}

fn newest_first(a: &ScoredActivity, b: &ScoredActivity) -> Ordering {
    match (a.activity.begin, b.activity.begin) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn name_ascending(a: &ScoredActivity, b: &ScoredActivity) -> Ordering {
    match (&a.sort_name, &b.sort_name) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
