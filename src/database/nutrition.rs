// ABOUTME: TACO nutrition table database operations
// ABOUTME: Case-insensitive substring search over the local reference food dataset
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymPulse

use super::Database;
use anyhow::Result;
use sqlx::Row;

/// Raw row from the TACO nutrition table.
///
/// All macro columns are nullable; validation and defaulting happen in the
/// food search layer, not here.
#[derive(Debug, Clone)]
pub struct TacoRow {
    /// Food name
    pub name: Option<String>,
    /// Kilocalories per 100 g
    pub kcal: Option<f64>,
    /// Protein grams per 100 g
    pub protein_g: Option<f64>,
    /// Fat grams per 100 g
    pub fat_g: Option<f64>,
}

impl Database {
    /// Create the TACO foods table and indexes
    pub(super) async fn migrate_nutrition(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS taco_foods (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                kcal REAL,
                protein_g REAL,
                fat_g REAL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_taco_foods_name ON taco_foods(name)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Case-insensitive substring search over food names, in table order.
    ///
    /// No explicit timeout is applied here; the local store is assumed
    /// low-latency, unlike the external fallback call.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn search_taco_foods(&self, query: &str, limit: u32) -> Result<Vec<TacoRow>> {
        let rows = sqlx::query(
            r"
            SELECT name, kcal, protein_g, fat_g
            FROM taco_foods
            WHERE lower(name) LIKE '%' || lower(?1) || '%'
            LIMIT ?2
            ",
        )
        .bind(query)
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|row| {
                Ok(TacoRow {
                    name: row.try_get("name")?,
                    kcal: row.try_get("kcal")?,
                    protein_g: row.try_get("protein_g")?,
                    fat_g: row.try_get("fat_g")?,
                })
            })
            .collect()
    }

    /// Insert a reference food (seeding and tests)
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub async fn insert_taco_food(
        &self,
        name: &str,
        kcal: Option<f64>,
        protein_g: Option<f64>,
        fat_g: Option<f64>,
    ) -> Result<()> {
        sqlx::query(
            "INSERT INTO taco_foods (name, kcal, protein_g, fat_g) VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(name)
        .bind(kcal)
        .bind(protein_g)
        .bind(fat_g)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
