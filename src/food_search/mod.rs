// ABOUTME: Two-tier food lookup as an ordered chain of named source strategies
// ABOUTME: Local table is authoritative; the external API is consulted only on empty results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymPulse

//! Food search strategy chain
//!
//! Sources are tried in registration order. A source that returns an empty
//! list hands the query to the next source; a source that returns an error
//! aborts the whole search. Local-store failures are therefore fatal rather
//! than a fallback trigger.

mod open_food_facts;
mod taco;

pub use open_food_facts::{OpenFoodFactsConfig, OpenFoodFactsSource};
pub use taco::TacoSource;

use crate::errors::AppResult;
use crate::models::FoodItem;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// A named food lookup strategy
#[async_trait]
pub trait FoodSource: Send + Sync {
    /// Strategy name, used in logs
    fn name(&self) -> &'static str;

    /// Search for foods matching the (already trimmed, non-empty) query.
    ///
    /// An empty result means "nothing here, try the next source". An error
    /// means the request as a whole fails.
    async fn search(&self, query: &str) -> AppResult<Vec<FoodItem>>;
}

/// Ordered chain of food sources
#[derive(Clone)]
pub struct FoodSearchService {
    sources: Vec<Arc<dyn FoodSource>>,
}

impl FoodSearchService {
    /// Build a service from sources in fallback order
    #[must_use]
    pub fn new(sources: Vec<Arc<dyn FoodSource>>) -> Self {
        Self { sources }
    }

    /// Run the search chain.
    ///
    /// Empty or whitespace-only queries short-circuit to an empty list
    /// without consulting any source.
    ///
    /// # Errors
    ///
    /// Propagates the first source error; later sources are not consulted.
    pub async fn search(&self, raw_query: &str) -> AppResult<Vec<FoodItem>> {
        let query = raw_query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        for source in &self.sources {
            let items = source.search(query).await?;
            if !items.is_empty() {
                debug!(source = source.name(), hits = items.len(), "food search resolved");
                return Ok(items);
            }
            debug!(source = source.name(), "food source empty, trying next");
        }

        Ok(Vec::new())
    }
}
