// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Middleware modules (caller identification, security headers).

pub mod auth;
pub mod security;

pub use auth::{identify_caller, Caller};
