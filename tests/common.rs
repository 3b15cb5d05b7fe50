// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides database, user, food seeding, and test server helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymPulse
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::must_use_candidate
)]

//! Shared test utilities for `gympulse` integration tests.

use anyhow::Result;
use gympulse::{
    auth::{generate_jwt_secret, hash_password, AuthManager},
    config::{AuthConfig, Environment, FoodApiConfig, ServerConfig},
    database::Database,
    models::{User, UserRole},
    server::{router, ServerResources},
};
use std::sync::{Arc, Once};
use tokio::net::TcpListener;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_test_writer()
            .init();
    });
}

/// Standard in-memory test database
pub async fn create_test_database() -> Result<Arc<Database>> {
    init_test_logging();
    Ok(Arc::new(Database::new("sqlite::memory:").await?))
}

/// Test configuration pointing the external food API at an unreachable base
/// so no test ever leaves the machine
pub fn test_config() -> ServerConfig {
    ServerConfig {
        http_port: 0,
        database_url: "sqlite::memory:".to_owned(),
        environment: Environment::Testing,
        food_api: FoodApiConfig {
            base_url: "http://127.0.0.1:9".to_owned(),
            timeout_ms: 200,
            page_size: 20,
        },
        auth: AuthConfig {
            jwt_secret: generate_jwt_secret(),
            jwt_expiry_hours: 24,
        },
    }
}

/// Create a user with the given credentials and role
pub async fn create_test_user(
    database: &Database,
    username: &str,
    password: &str,
    role: UserRole,
) -> Result<User> {
    let mut user = User::new(
        username.to_owned(),
        hash_password(password)?,
        Some(username.to_owned()),
    );
    user.role = role;
    database.create_user(&user).await?;
    Ok(user)
}

/// Seed a handful of TACO rows, including one without calories
pub async fn seed_taco_foods(database: &Database) -> Result<()> {
    database
        .insert_taco_food("Arroz, integral, cozido", Some(124.0), Some(2.6), Some(1.0))
        .await?;
    database
        .insert_taco_food("Arroz, tipo 1, cozido", Some(128.0), Some(2.5), Some(0.2))
        .await?;
    database
        .insert_taco_food("Feijão, carioca, cozido", Some(76.0), Some(4.8), Some(0.5))
        .await?;
    // No calorie value: must never appear in search results
    database
        .insert_taco_food("Arroz, incompleto", None, Some(2.0), None)
        .await?;
    Ok(())
}

/// Build full server resources over the given database with the default
/// food source chain (external calls will fail fast per `test_config`)
pub fn test_resources(database: Arc<Database>) -> Arc<ServerResources> {
    let config = Arc::new(test_config());
    let auth = AuthManager::new(
        config.auth.jwt_secret.clone().into_bytes(),
        config.auth.jwt_expiry_hours,
    );
    Arc::new(ServerResources::new(database, auth, config))
}

/// Serve the router on an ephemeral loopback port, returning the base URL
pub async fn spawn_test_server(resources: Arc<ServerResources>) -> Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let address = listener.local_addr()?;

    tokio::spawn(async move {
        let _ = axum::serve(listener, router(resources)).await;
    });

    Ok(format!("http://{address}"))
}
