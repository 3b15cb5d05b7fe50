// ABOUTME: Open Food Facts fallback food source over HTTP
// ABOUTME: Issues the bounded search request and normalizes the products payload
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymPulse

use super::FoodSource;
use crate::config::FoodApiConfig;
use crate::constants::messages;
use crate::errors::{AppError, AppResult};
use crate::models::FoodItem;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

const ENERGY_KCAL_100G: &str = "energy-kcal_100g";
const PROTEINS_100G: &str = "proteins_100g";

/// External search response envelope
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    products: Vec<Product>,
}

/// Community-submitted product record
#[derive(Debug, Deserialize)]
struct Product {
    product_name: Option<String>,
    generic_name: Option<String>,
    #[serde(default)]
    nutriments: Value,
}

/// Fallback source backed by the Open Food Facts public API
pub struct OpenFoodFactsSource {
    config: FoodApiConfig,
    client: Client,
}

/// Re-exported configuration alias for the external source
pub type OpenFoodFactsConfig = FoodApiConfig;

impl OpenFoodFactsSource {
    /// Create a source with the configured base URL and timeout
    #[must_use]
    pub fn new(config: FoodApiConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .unwrap_or_default();

        Self { config, client }
    }

    /// Query parameters for the external search endpoint
    fn query_params(&self, query: &str) -> [(&'static str, String); 5] {
        [
            ("search_terms", query.to_owned()),
            ("search_simple", "1".to_owned()),
            ("action", "process".to_owned()),
            ("json", "1".to_owned()),
            ("page_size", self.config.page_size.to_string()),
        ]
    }
}

#[async_trait]
impl FoodSource for OpenFoodFactsSource {
    fn name(&self) -> &'static str {
        "openfoodfacts"
    }

    async fn search(&self, query: &str) -> AppResult<Vec<FoodItem>> {
        let url = format!("{}/cgi/search.pl", self.config.base_url);

        let response = self
            .client
            .get(&url)
            .query(&self.query_params(query))
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, query, "external food search request failed");
                AppError::external_service("external food database unreachable").with_source(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(status = %status, query, "external food search returned non-success");
            return Err(AppError::external_service(format!(
                "external food database returned status {status}"
            )));
        }

        let body: SearchResponse = response.json().await.map_err(|e| {
            tracing::error!(error = %e, query, "external food search response malformed");
            AppError::external_service("external food database response malformed").with_source(e)
        })?;

        Ok(items_from_products(body.products))
    }
}

/// Normalize external products into items, dropping any without finite calories
fn items_from_products(products: Vec<Product>) -> Vec<FoodItem> {
    products
        .into_iter()
        .filter_map(|product| {
            let calories = nutrient_value(&product.nutriments, ENERGY_KCAL_100G)?;

            let name = product
                .product_name
                .filter(|n| !n.trim().is_empty())
                .or_else(|| product.generic_name.filter(|n| !n.trim().is_empty()))
                .unwrap_or_else(|| messages::UNNAMED_FOOD.to_owned());

            Some(FoodItem {
                name,
                calories,
                protein: nutrient_value(&product.nutriments, PROTEINS_100G).unwrap_or(0.0),
                fat: None,
                source: None,
                portion: FoodItem::standard_portion(),
            })
        })
        .collect()
}

/// Read a nutrient as a finite number; the API reports them as numbers or
/// numeric strings depending on the product.
fn nutrient_value(nutriments: &Value, key: &str) -> Option<f64> {
    let value = nutriments.get(key)?;
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    number.is_finite().then_some(number)
}
