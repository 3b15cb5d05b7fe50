// ABOUTME: Core data models for the GymPulse API
// ABOUTME: Defines FoodItem, User, UserRole and their wire representations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymPulse

//! Core data structures

use crate::constants::PORTION_100G;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Normalized food search result.
///
/// Constructed per-request from local rows or external products; never
/// persisted. Both sources report values per 100 grams. An item without a
/// finite calorie value is not a valid food entry and is dropped before it
/// ever becomes a `FoodItem`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    /// Display name
    pub name: String,
    /// Kilocalories per 100 g; always finite
    pub calories: f64,
    /// Protein grams per 100 g; 0 when the source lacks it
    pub protein: f64,
    /// Fat grams per 100 g; present only for local-source results
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fat: Option<f64>,
    /// Provenance tag; `"taco"` for the local table, omitted for external results
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Serving descriptor, fixed at `"100 g"`
    pub portion: String,
}

impl FoodItem {
    /// Standard portion string shared by both sources
    #[must_use]
    pub fn standard_portion() -> String {
        PORTION_100G.to_owned()
    }
}

/// User role within the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Full access, including user and affiliate management
    Admin,
    /// Regular member
    Member,
}

impl UserRole {
    /// Database/wire representation
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Member => "member",
        }
    }

    /// Parse from the database representation, defaulting to member
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "admin" => UserRole::Admin,
            _ => UserRole::Member,
        }
    }
}

/// Application user account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    pub id: Uuid,
    /// Unique login name
    pub username: String,
    /// Optional display name
    pub display_name: Option<String>,
    /// Bcrypt password hash
    pub password_hash: String,
    /// Role
    pub role: UserRole,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new member account with a fresh id
    #[must_use]
    pub fn new(username: String, password_hash: String, display_name: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            display_name,
            password_hash,
            role: UserRole::Member,
            created_at: Utc::now(),
        }
    }

    /// Public projection returned by the login endpoint (no password hash)
    #[must_use]
    pub fn to_public(&self) -> PublicUser {
        PublicUser {
            id: self.id.to_string(),
            username: self.username.clone(),
            display_name: self.display_name.clone(),
            role: self.role,
        }
    }
}

/// User projection safe to return to clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicUser {
    /// Unique identifier
    pub id: String,
    /// Login name
    pub username: String,
    /// Optional display name
    pub display_name: Option<String>,
    /// Role
    pub role: UserRole,
}
