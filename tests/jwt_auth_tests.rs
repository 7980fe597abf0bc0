// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! JWT compatibility tests.
//!
//! These tests verify that tokens created by `create_jwt` decode with the
//! claims layout the caller-identification middleware expects, catching
//! compatibility issues early.

use activity_search::middleware::auth::{create_jwt, verify_jwt};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

const SIGNING_KEY: &[u8] = b"test_signing_key_32_bytes_long!!";

/// Claims structure that must match what the middleware expects.
/// If either create_jwt or the middleware changes, this test should catch
/// the incompatibility.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    exp: usize,
    iat: usize,
}

#[test]
fn test_jwt_claims_layout() {
    let token = create_jwt("5f3c9a", SIGNING_KEY).unwrap();

    let key = DecodingKey::from_secret(SIGNING_KEY);
    let validation = Validation::new(Algorithm::HS256);

    let token_data = decode::<Claims>(&token, &key, &validation)
        .expect("Failed to decode JWT - check Claims struct compatibility");

    assert_eq!(token_data.claims.sub, "5f3c9a");
    assert!(token_data.claims.iat > 0);
    assert!(token_data.claims.exp > token_data.claims.iat);
}

#[test]
fn test_verify_returns_string_subject() {
    // User IDs are opaque document IDs, not numbers
    let token = create_jwt("user:alice@example", SIGNING_KEY).unwrap();

    assert_eq!(verify_jwt(&token, SIGNING_KEY).unwrap(), "user:alice@example");
}

#[test]
fn test_jwt_expiration_is_future() {
    use std::time::{SystemTime, UNIX_EPOCH};

    let token = create_jwt("u1", SIGNING_KEY).unwrap();

    let key = DecodingKey::from_secret(SIGNING_KEY);
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = false; // We'll check manually

    let token_data = decode::<Claims>(&token, &key, &validation).unwrap();

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs() as usize;

    // Token should expire at least 29 days in the future
    assert!(
        token_data.claims.exp > now + 86400 * 29,
        "Token expiration should be ~30 days in the future"
    );
}

#[test]
fn test_expired_token_rejected() {
    use jsonwebtoken::{encode, EncodingKey, Header};

    let claims = Claims {
        sub: "u1".to_string(),
        exp: 1_000_000,
        iat: 999_000,
    };
    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(SIGNING_KEY),
    )
    .unwrap();

    assert!(verify_jwt(&token, SIGNING_KEY).is_err());
}
