// ABOUTME: Food search route handler backed by the two-tier lookup chain
// ABOUTME: Collapses every lookup failure into one generic user-facing error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymPulse

//! Food search route
//!
//! `GET /search?q=<text>` returns a JSON array of normalized food items.
//! Any data-store or external failure is logged with its cause and surfaced
//! as a single generic 500 message.

use crate::constants::messages;
use crate::errors::AppError;
use crate::server::ServerResources;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

/// Query string for the search endpoint
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Free-text food query; absent is treated as empty
    #[serde(default)]
    pub q: String,
}

/// Food search routes handler
pub struct FoodRoutes;

impl FoodRoutes {
    /// Create all food search routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/search", get(Self::handle_search))
            .with_state(resources)
    }

    /// Handle GET /search
    async fn handle_search(
        State(resources): State<Arc<ServerResources>>,
        Query(query): Query<SearchQuery>,
    ) -> Result<Response, AppError> {
        let items = resources
            .food_search
            .search(&query.q)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, query = %query.q, "food search failed");
                AppError::internal(messages::FOOD_SEARCH_FAILED)
            })?;

        Ok((StatusCode::OK, Json(items)).into_response())
    }
}
