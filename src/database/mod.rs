// ABOUTME: SQLite database access layer with startup schema migration
// ABOUTME: Wraps the connection pool used by user and nutrition table operations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymPulse

//! Database layer
//!
//! A thin wrapper over an `SQLite` pool. The schema is created in place on
//! startup with inline queries; there is no separate migration tooling.

use anyhow::{Context, Result};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

mod nutrition;
mod users;

pub use nutrition::TacoRow;

/// Database handle shared across the server
#[derive(Clone)]
pub struct Database {
    pub(crate) pool: SqlitePool,
}

impl Database {
    /// Connect to the database and run schema migration
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or any schema statement fails.
    pub async fn new(database_url: &str) -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await
            .with_context(|| format!("failed to connect to database: {database_url}"))?;

        let database = Self { pool };
        database.migrate().await?;
        Ok(database)
    }

    /// Create tables and indexes if they do not exist
    async fn migrate(&self) -> Result<()> {
        self.migrate_users().await?;
        self.migrate_nutrition().await?;
        Ok(())
    }

    /// Access the underlying pool (tests and seeding)
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
