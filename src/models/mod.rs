// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod activity;
pub mod page;

pub use activity::{Activity, OwnerRef, Visibility};
pub use page::{Page, PageRequest};
