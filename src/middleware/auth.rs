// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! JWT caller identification middleware.
//!
//! Search is open to anonymous callers, so a missing token is not an error:
//! the request proceeds as anonymous and only sees public activities. A token
//! that is present but invalid is rejected.

use crate::error::AppError;
use crate::AppState;
use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Session cookie name.
pub const TOKEN_COOKIE: &str = "activity_token";

/// JWT claims structure.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: usize,
    /// Issued at (Unix timestamp)
    pub iat: usize,
}

/// Who is making the request, as established by [`identify_caller`].
#[derive(Debug, Clone, Default)]
pub struct Caller {
    pub user_id: Option<String>,
}

impl Caller {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }
}

/// Middleware that attaches a [`Caller`] to every request.
///
/// A non-Bearer `Authorization` header is [`AppError::Unauthorized`]; a
/// token that fails verification is [`AppError::InvalidToken`].
pub async fn identify_caller(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    // Try cookie first, then header
    let token = if let Some(cookie) = jar.get(TOKEN_COOKIE) {
        Some(cookie.value().to_string())
    } else {
        let auth_header = request
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok());

        match auth_header {
            Some(h) if h.starts_with("Bearer ") => Some(h[7..].to_string()),
            Some(_) => return Err(AppError::Unauthorized),
            None => None,
        }
    };

    let caller = match token {
        Some(token) => {
            let user_id =
                verify_jwt(&token, &state.config.jwt_signing_key).map_err(|e| {
                    tracing::debug!(error = %e, "Rejected session token");
                    AppError::InvalidToken
                })?;
            Caller {
                user_id: Some(user_id),
            }
        }
        None => Caller::anonymous(),
    };

    request.extensions_mut().insert(caller);

    Ok(next.run(request).await)
}

/// Verify a session token and return its subject.
pub fn verify_jwt(token: &str, signing_key: &[u8]) -> anyhow::Result<String> {
    let key = DecodingKey::from_secret(signing_key);
    let validation = Validation::new(Algorithm::HS256);

    let token_data = decode::<Claims>(token, &key, &validation)?;
    let subject = token_data.claims.sub.trim();
    if subject.is_empty() {
        anyhow::bail!("token has an empty subject");
    }

    Ok(subject.to_string())
}

/// Create a JWT for a user session.
pub fn create_jwt(user_id: &str, signing_key: &[u8]) -> anyhow::Result<String> {
    use jsonwebtoken::{encode, EncodingKey, Header};
    use std::time::{SystemTime, UNIX_EPOCH};

    let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs() as usize;

    let claims = Claims {
        sub: user_id.to_string(),
        iat: now,
        exp: now + 30 * 24 * 60 * 60, // 30 days
    };

    Ok(encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(signing_key),
    )?)
}
