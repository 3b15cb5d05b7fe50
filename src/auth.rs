// ABOUTME: JWT-based user authentication for session token issuance and validation
// ABOUTME: Handles token generation, claim validation, and bcrypt password hashing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymPulse

//! Authentication manager: session JWTs and password hashing

use crate::models::{User, UserRole};
use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use rand::{distributions::Alphanumeric, Rng};
use serde::{Deserialize, Serialize};

/// JWT claims for user sessions
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub sub: String,
    /// Login name
    pub username: String,
    /// Role at issuance time
    pub role: UserRole,
    /// Issued-at timestamp (seconds)
    pub iat: i64,
    /// Expiration timestamp (seconds)
    pub exp: i64,
}

/// Authentication manager for session JWTs
#[derive(Clone)]
pub struct AuthManager {
    secret: Vec<u8>,
    token_expiry_hours: i64,
}

impl AuthManager {
    /// Create a new authentication manager with an HS256 signing secret
    #[must_use]
    pub fn new(secret: Vec<u8>, token_expiry_hours: i64) -> Self {
        Self {
            secret,
            token_expiry_hours,
        }
    }

    /// Generate a session token for a user
    ///
    /// # Errors
    ///
    /// Returns an error if JWT encoding fails.
    pub fn generate_token(&self, user: &User) -> Result<String> {
        let now = Utc::now();
        let expiry = now + Duration::hours(self.token_expiry_hours);

        let claims = Claims {
            sub: user.id.to_string(),
            username: user.username.clone(),
            role: user.role,
            iat: now.timestamp(),
            exp: expiry.timestamp(),
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(&self.secret),
        )
        .context("failed to encode session token")
    }

    /// Validate a session token and return its claims
    ///
    /// # Errors
    ///
    /// Returns an error if the signature is invalid, the token is expired,
    /// or the token is malformed.
    pub fn validate_token(&self, token: &str) -> Result<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;

        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(&self.secret),
            &validation,
        )
        .context("session token validation failed")?;

        Ok(data.claims)
    }
}

/// Generate a random JWT signing secret
#[must_use]
pub fn generate_jwt_secret() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(64)
        .map(char::from)
        .collect()
}

/// Hash a password for storage
///
/// # Errors
///
/// Returns an error if bcrypt hashing fails.
pub fn hash_password(password: &str) -> Result<String> {
    bcrypt::hash(password, bcrypt::DEFAULT_COST).context("failed to hash password")
}

/// Verify a password against a stored hash
///
/// A malformed stored hash counts as a failed verification rather than an
/// error surfaced to the caller.
#[must_use]
pub fn verify_password(password: &str, hash: &str) -> bool {
    bcrypt::verify(password, hash).unwrap_or(false)
}
