// ABOUTME: Centralized application constants for limits, messages, and session keys
// ABOUTME: Single source of truth for values shared between server, client, and tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymPulse

//! Application-wide constants

/// Service identity
pub mod service {
    /// Service name used in logs and health responses
    pub const NAME: &str = "gympulse-api";
}

/// Request limits and timeouts
pub mod limits {
    /// Maximum rows fetched from the local nutrition table per search
    pub const FOOD_SEARCH_PAGE_SIZE: u32 = 20;

    /// Page size requested from the external food database
    pub const EXTERNAL_PAGE_SIZE: u32 = 20;

    /// Hard timeout for the external food database call, in milliseconds
    pub const EXTERNAL_SEARCH_TIMEOUT_MS: u64 = 1200;
}

/// User-facing messages (pt-BR, matching the application frontend)
pub mod messages {
    /// Generic food search failure; specific causes are logged, not exposed
    pub const FOOD_SEARCH_FAILED: &str = "Erro ao buscar alimentos";

    /// Login form submitted with an empty username or password
    pub const MISSING_CREDENTIALS: &str = "informe usuário e senha";

    /// Unknown user or wrong password
    pub const INVALID_CREDENTIALS: &str = "usuário ou senha inválidos";

    /// Login response lacked the required token or user payload
    pub const INVALID_LOGIN_RESPONSE: &str = "resposta inválida do servidor";

    /// No backend could be reached during login
    pub const API_UNREACHABLE: &str = "não foi possível conectar ao servidor";

    /// Placeholder name for external products without one
    pub const UNNAMED_FOOD: &str = "Alimento sem nome";
}

/// Keys persisted in the client session store
pub mod session_keys {
    /// JWT session token
    pub const AUTH_TOKEN: &str = "gp-auth-token";

    /// Serialized user object
    pub const USER: &str = "gp-user";

    /// Confirmed backend API base URL
    pub const API_BASE: &str = "gp-api-base";
}

/// API base discovery defaults
pub mod discovery {
    /// Conventional local backend port probed on host-derived guesses
    pub const DEFAULT_API_PORT: u16 = 3001;

    /// Hardcoded loopback fallbacks probed last, in order
    pub const LOOPBACK_FALLBACKS: [&str; 2] =
        ["http://localhost:3001", "http://127.0.0.1:3001"];

    /// Health endpoint path appended to each candidate base
    pub const HEALTH_PATH: &str = "/api/health";

    /// Login endpoint path appended to the discovered base
    pub const LOGIN_PATH: &str = "/api/auth/login";
}

/// Serving descriptor shared by both nutrition sources
pub const PORTION_100G: &str = "100 g";

/// Provenance tag for local nutrition table results
pub const SOURCE_TACO: &str = "taco";
