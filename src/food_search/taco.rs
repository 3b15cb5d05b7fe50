// ABOUTME: Local TACO nutrition table food source
// ABOUTME: Maps database rows into normalized FoodItems, dropping rows without calories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymPulse

use super::FoodSource;
use crate::constants::{limits, SOURCE_TACO};
use crate::database::{Database, TacoRow};
use crate::errors::{AppError, AppResult};
use crate::models::FoodItem;
use async_trait::async_trait;
use std::sync::Arc;

/// Authoritative local source backed by the TACO reference table
pub struct TacoSource {
    database: Arc<Database>,
    limit: u32,
}

impl TacoSource {
    /// Create a source over the given database
    #[must_use]
    pub fn new(database: Arc<Database>) -> Self {
        Self {
            database,
            limit: limits::FOOD_SEARCH_PAGE_SIZE,
        }
    }
}

#[async_trait]
impl FoodSource for TacoSource {
    fn name(&self) -> &'static str {
        SOURCE_TACO
    }

    async fn search(&self, query: &str) -> AppResult<Vec<FoodItem>> {
        let rows = self
            .database
            .search_taco_foods(query, self.limit)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, query, "taco table query failed");
                AppError::database("local nutrition table query failed")
            })?;

        Ok(rows.into_iter().filter_map(item_from_row).collect())
    }
}

/// Map a raw row to a normalized item.
///
/// A row without a finite calorie value is not a valid food entry and is
/// dropped. Protein and fat default to 0 when absent.
fn item_from_row(row: TacoRow) -> Option<FoodItem> {
    let calories = row.kcal.filter(|kcal| kcal.is_finite())?;

    Some(FoodItem {
        name: row.name.unwrap_or_default(),
        calories,
        protein: row.protein_g.filter(|p| p.is_finite()).unwrap_or(0.0),
        fat: Some(row.fat_g.filter(|f| f.is_finite()).unwrap_or(0.0)),
        source: Some(SOURCE_TACO.to_owned()),
        portion: FoodItem::standard_portion(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, kcal: Option<f64>, protein: Option<f64>, fat: Option<f64>) -> TacoRow {
        TacoRow {
            name: Some(name.to_owned()),
            kcal,
            protein_g: protein,
            fat_g: fat,
        }
    }

    #[test]
    fn row_without_kcal_is_dropped() {
        assert!(item_from_row(row("Feijão", None, Some(4.8), Some(0.5))).is_none());
    }

    #[test]
    fn row_with_nan_kcal_is_dropped() {
        assert!(item_from_row(row("Feijão", Some(f64::NAN), None, None)).is_none());
    }

    #[test]
    fn macros_default_to_zero() {
        let item = item_from_row(row("Feijão, carioca, cozido", Some(76.0), None, None)).unwrap();
        assert_eq!(item.protein, 0.0);
        assert_eq!(item.fat, Some(0.0));
        assert_eq!(item.source.as_deref(), Some("taco"));
        assert_eq!(item.portion, "100 g");
    }
}
