// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Page request and page result types.

use crate::search::SearchError;
use serde::Serialize;

/// A validated page request (0-based page index).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub size: usize,
}

impl PageRequest {
    /// Validate raw page parameters.
    ///
    /// Callers must pass a positive `size` and a non-negative `page`;
    /// anything else is rejected as `InvalidArgument` before any work is done.
    pub fn new(page: i64, size: i64) -> Result<Self, SearchError> {
        if size <= 0 {
            return Err(SearchError::InvalidArgument(format!(
                "page size must be positive, got {}",
                size
            )));
        }
        if page < 0 {
            return Err(SearchError::InvalidArgument(format!(
                "page index must not be negative, got {}",
                page
            )));
        }

        let page = usize::try_from(page)
            .map_err(|_| SearchError::InvalidArgument("page index out of range".to_string()))?;
        let size = usize::try_from(size)
            .map_err(|_| SearchError::InvalidArgument("page size out of range".to_string()))?;

        Ok(Self { page, size })
    }

    /// Offset of the first item, or `None` if it does not fit in `usize`.
    pub fn offset(&self) -> Option<usize> {
        self.page.checked_mul(self.size)
    }
}

/// One page of results plus the total number of matches.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Total matches before slicing
    pub total: usize,
    pub page: usize,
    pub size: usize,
}

impl<T> Page<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            size: self.size,
        }
    }
}
