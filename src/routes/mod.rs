// ABOUTME: HTTP route handler modules
// ABOUTME: Health, authentication, and food search endpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymPulse

//! HTTP routes

/// Login endpoint
pub mod auth;

/// Food search endpoint
pub mod foods;

/// Health and readiness endpoints
pub mod health;
