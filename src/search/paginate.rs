// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory pagination over an ordered result set.

use crate::models::{Page, PageRequest};

/// Slice out the requested page.
///
/// Pages past the end (including offsets that overflow) come back empty
/// with the full `total`.
pub fn paginate<T>(items: Vec<T>, request: PageRequest) -> Page<T> {
    let total = items.len();

    let items = match request.offset() {
        Some(start) if start < total => {
            let end = start.saturating_add(request.size).min(total);
            items.into_iter().skip(start).take(end - start).collect()
        }
        _ => Vec::new(),
    };

    Page {
        items,
        total,
        page: request.page,
        size: request.size,
    }
}
