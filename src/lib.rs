// ABOUTME: Main library entry point for the GymPulse diet and fitness tracking backend
// ABOUTME: Exposes the food search service, auth endpoints, view mapping, and login bootstrap client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymPulse

#![deny(unsafe_code)]

//! # GymPulse
//!
//! Backend and client-side plumbing for a personal diet/fitness tracking
//! application.
//!
//! ## Components
//!
//! - **Food search**: `GET /search?q=` performs a two-tier lookup — the local
//!   TACO nutrition table first, falling back to the Open Food Facts public
//!   API only when the local table yields nothing. Both result shapes are
//!   normalized into [`models::FoodItem`].
//! - **Authentication**: `POST /api/auth/login` exchanges username/password
//!   for a JWT session token.
//! - **View mapping**: [`views`] holds the static bidirectional map between
//!   application view identifiers and URL paths.
//! - **Login bootstrap**: [`bootstrap`] discovers the backend API base by
//!   probing candidate URLs and performs the credential login, persisting the
//!   session into a [`bootstrap::SessionStore`].
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use gympulse::config::ServerConfig;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = ServerConfig::from_env()?;
//! println!("GymPulse configured for port {}", config.http_port);
//! # Ok(())
//! # }
//! ```

/// JWT issuance and validation, password hashing
pub mod auth;

/// API base discovery and credential login client
pub mod bootstrap;

/// Environment-based server configuration
pub mod config;

/// Shared constants: limits, user-facing messages, session keys
pub mod constants;

/// `SQLite` access: users and the TACO nutrition table
pub mod database;

/// Unified error handling and HTTP error responses
pub mod errors;

/// Two-tier food lookup strategy chain
pub mod food_search;

/// Structured logging configuration
pub mod logging;

/// Core data models
pub mod models;

/// HTTP route handlers
pub mod routes;

/// HTTP server assembly and shared resources
pub mod server;

/// View-to-path mapping and path classification
pub mod views;
