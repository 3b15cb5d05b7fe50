// ABOUTME: User authentication route handlers for credential login
// ABOUTME: Exchanges username/password for a JWT session token and public user record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymPulse

//! Authentication routes

use crate::auth::verify_password;
use crate::constants::messages;
use crate::errors::AppError;
use crate::models::PublicUser;
use crate::server::ServerResources;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

/// User login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Login name
    pub username: String,
    /// Plaintext password
    pub password: String,
}

/// User login response
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// Session JWT
    pub token: String,
    /// Authenticated user
    pub user: PublicUser,
}

/// Authentication routes handler
pub struct AuthRoutes;

impl AuthRoutes {
    /// Create all authentication routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/auth/login", post(Self::handle_login))
            .with_state(resources)
    }

    /// Handle POST /api/auth/login
    async fn handle_login(
        State(resources): State<Arc<ServerResources>>,
        Json(body): Json<LoginRequest>,
    ) -> Result<Response, AppError> {
        if body.username.trim().is_empty() || body.password.trim().is_empty() {
            return Err(AppError::invalid_input(messages::MISSING_CREDENTIALS));
        }

        let user = resources
            .database
            .get_user_by_username(body.username.trim())
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "user lookup failed during login");
                AppError::database("user lookup failed")
            })?
            .ok_or_else(|| {
                warn!(username = %body.username, "login attempt for unknown user");
                AppError::auth_invalid(messages::INVALID_CREDENTIALS)
            })?;

        if !verify_password(&body.password, &user.password_hash) {
            warn!(username = %user.username, "login attempt with wrong password");
            return Err(AppError::auth_invalid(messages::INVALID_CREDENTIALS));
        }

        let token = resources.auth.generate_token(&user).map_err(|e| {
            tracing::error!(error = %e, "session token generation failed");
            AppError::internal("failed to create session")
        })?;

        info!(username = %user.username, "user logged in");

        let response = LoginResponse {
            token,
            user: user.to_public(),
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
