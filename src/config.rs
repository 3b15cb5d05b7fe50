// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, runtime parsing, and typed defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymPulse

//! Environment-based configuration management

use crate::constants::limits;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;

/// Environment type
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback to development
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Environment::Production,
            "testing" | "test" => Environment::Testing,
            _ => Environment::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Production => write!(f, "production"),
            Environment::Testing => write!(f, "testing"),
        }
    }
}

/// External food database (Open Food Facts) settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodApiConfig {
    /// Base URL of the external food database
    pub base_url: String,
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
    /// Page size requested from the external search
    pub page_size: u32,
}

impl Default for FoodApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://world.openfoodfacts.org".to_owned(),
            timeout_ms: limits::EXTERNAL_SEARCH_TIMEOUT_MS,
            page_size: limits::EXTERNAL_PAGE_SIZE,
        }
    }
}

/// Authentication settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret used to sign session JWTs
    pub jwt_secret: String,
    /// Token validity in hours
    pub jwt_expiry_hours: i64,
}

/// Server configuration loaded from the environment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// Database connection string
    pub database_url: String,
    /// Deployment environment
    pub environment: Environment,
    /// External food database settings
    pub food_api: FoodApiConfig,
    /// Authentication settings
    pub auth: AuthConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a set variable fails to parse into its typed form.
    pub fn from_env() -> Result<Self> {
        let http_port = parse_env("HTTP_PORT", 3001_u16)?;
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:gympulse.db?mode=rwc".to_owned());
        let environment = Environment::from_str_or_default(
            &env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_owned()),
        );

        let food_api = FoodApiConfig {
            base_url: env::var("FOOD_API_BASE_URL")
                .unwrap_or_else(|_| FoodApiConfig::default().base_url),
            timeout_ms: parse_env("FOOD_API_TIMEOUT_MS", limits::EXTERNAL_SEARCH_TIMEOUT_MS)?,
            page_size: parse_env("FOOD_API_PAGE_SIZE", limits::EXTERNAL_PAGE_SIZE)?,
        };

        let auth = AuthConfig {
            jwt_secret: env::var("JWT_SECRET")
                .unwrap_or_else(|_| crate::auth::generate_jwt_secret()),
            jwt_expiry_hours: parse_env("JWT_EXPIRY_HOURS", 24_i64)?,
        };

        Ok(Self {
            http_port,
            database_url,
            environment,
            food_api,
            auth,
        })
    }

    /// One-line configuration summary for startup logs (no secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "environment={} http_port={} database_url={} food_api={} food_api_timeout_ms={}",
            self.environment,
            self.http_port,
            self.database_url,
            self.food_api.base_url,
            self.food_api.timeout_ms
        )
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .with_context(|| format!("invalid value for {key}: {raw}")),
        Err(_) => Ok(default),
    }
}
