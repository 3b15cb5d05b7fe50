// ABOUTME: Login bootstrap client: API base discovery, session storage, credential login
// ABOUTME: Probes candidate backends sequentially, memoized single-flight, then logs in
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymPulse

//! Login bootstrap
//!
//! The frontend may be served from a different host/port than the backend in
//! local and LAN deployments, so the backend origin is discovered at runtime:
//! an ordered, de-duplicated candidate list is probed against `/api/health`,
//! one candidate at a time, stopping at the first success. Discovery runs at
//! most once per client; concurrent callers share the in-flight attempt.
//!
//! Login exchanges username/password for a session token and persists the
//! token, the serialized user, and the confirmed API base into the session
//! store under the `gp-*` keys.

use crate::constants::{discovery, messages, session_keys};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};
use url::Url;

/// Client-side session storage (the browser's sessionStorage analogue)
pub trait SessionStore: Send + Sync {
    /// Read a stored value
    fn get(&self, key: &str) -> Option<String>;
    /// Store a value
    fn put(&self, key: &str, value: &str);
    /// Remove a value
    fn remove(&self, key: &str);
}

/// In-memory session store
#[derive(Default)]
pub struct MemorySessionStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemorySessionStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values
            .lock()
            .ok()
            .and_then(|map| map.get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) {
        if let Ok(mut map) = self.values.lock() {
            map.insert(key.to_owned(), value.to_owned());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut map) = self.values.lock() {
            map.remove(key);
        }
    }
}

/// An authenticated session as persisted by the bootstrap flow
#[derive(Debug, Clone)]
pub struct Session {
    /// Session JWT
    pub token: String,
    /// Server-provided user object
    pub user: Value,
}

/// Check for an already-persisted session; when present the login flow is
/// skipped entirely
#[must_use]
pub fn existing_session(store: &dyn SessionStore) -> Option<Session> {
    let token = store.get(session_keys::AUTH_TOKEN)?;
    let user: Value = serde_json::from_str(&store.get(session_keys::USER)?).ok()?;
    if !user.is_object() {
        return None;
    }
    Some(Session { token, user })
}

/// Health probe over a candidate API base
#[async_trait]
pub trait HealthProbe: Send + Sync {
    /// True when `{base}/api/health` answers with a success status
    async fn is_healthy(&self, base: &str) -> bool;
}

/// HTTP health probe.
///
/// No explicit per-probe timeout is applied; the default network behavior of
/// the client decides when an unreachable candidate fails.
pub struct HttpHealthProbe {
    client: Client,
}

impl HttpHealthProbe {
    /// Create a probe with a default client
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Default for HttpHealthProbe {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HealthProbe for HttpHealthProbe {
    async fn is_healthy(&self, base: &str) -> bool {
        let url = format!("{base}{}", discovery::HEALTH_PATH);
        match self.client.get(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                debug!(base, error = %e, "health probe failed");
                false
            }
        }
    }
}

/// Environment hints feeding the candidate list
#[derive(Debug, Clone, Default)]
pub struct DiscoveryHints {
    /// API base from a page meta tag, when the deployment pins one
    pub meta_base: Option<String>,
    /// Origin the page was served from
    pub origin: Option<String>,
}

/// Strip surrounding whitespace and any trailing slash so duplicates collapse
fn normalize_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_owned()
}

/// Build the ordered, de-duplicated candidate list: previously stored base,
/// meta tag value, page origin, host-based guesses, loopback fallbacks
#[must_use]
pub fn candidate_bases(stored_base: Option<&str>, hints: &DiscoveryHints) -> Vec<String> {
    let mut raw: Vec<String> = Vec::new();

    if let Some(stored) = stored_base {
        raw.push(stored.to_owned());
    }
    if let Some(meta) = &hints.meta_base {
        raw.push(meta.clone());
    }
    if let Some(origin) = &hints.origin {
        raw.push(origin.clone());
        if let Ok(parsed) = Url::parse(origin) {
            if let Some(host) = parsed.host_str() {
                let scheme = parsed.scheme();
                raw.push(format!("{scheme}://{host}"));
                raw.push(format!(
                    "{scheme}://{host}:{}",
                    discovery::DEFAULT_API_PORT
                ));
            }
        }
    }
    for fallback in discovery::LOOPBACK_FALLBACKS {
        raw.push(fallback.to_owned());
    }

    let mut candidates: Vec<String> = Vec::with_capacity(raw.len());
    for base in raw {
        let normalized = normalize_base(&base);
        if !normalized.is_empty() && !candidates.contains(&normalized) {
            candidates.push(normalized);
        }
    }
    candidates
}

/// Lazily discovered backend API base.
///
/// The probe sequence runs at most once; the resolved base is cached for the
/// lifetime of the instance and shared by concurrent callers.
pub struct ApiDiscovery {
    store: Arc<dyn SessionStore>,
    probe: Arc<dyn HealthProbe>,
    hints: DiscoveryHints,
    resolved: OnceCell<String>,
}

impl ApiDiscovery {
    /// Create a discovery instance
    #[must_use]
    pub fn new(
        store: Arc<dyn SessionStore>,
        probe: Arc<dyn HealthProbe>,
        hints: DiscoveryHints,
    ) -> Self {
        Self {
            store,
            probe,
            hints,
            resolved: OnceCell::new(),
        }
    }

    /// Resolve the API base, probing candidates on first use.
    ///
    /// The first candidate whose health endpoint answers 2xx is persisted to
    /// the session store and returned. When every candidate fails, the last
    /// candidate is returned as the in-memory default without persisting.
    pub async fn discover(&self) -> String {
        self.resolved
            .get_or_init(|| async {
                let stored = self.store.get(session_keys::API_BASE);
                let candidates = candidate_bases(stored.as_deref(), &self.hints);

                for base in &candidates {
                    if self.probe.is_healthy(base).await {
                        info!(base, "API base discovered");
                        self.store.put(session_keys::API_BASE, base);
                        return base.clone();
                    }
                }

                let default = candidates
                    .last()
                    .cloned()
                    .unwrap_or_else(|| normalize_base(discovery::LOOPBACK_FALLBACKS[1]));
                warn!(default, "no API base reachable, keeping in-memory default");
                default
            })
            .await
            .clone()
    }

    /// Access the session store backing this discovery
    #[must_use]
    pub fn store(&self) -> &Arc<dyn SessionStore> {
        &self.store
    }
}

/// Login failure, each variant carrying its inline user-facing message
#[derive(Debug, Error)]
pub enum LoginError {
    /// Username or password left empty; no network call is made
    #[error("{}", messages::MISSING_CREDENTIALS)]
    MissingCredentials,
    /// Backend rejected the credentials; carries the server message when present
    #[error("{0}")]
    InvalidCredentials(String),
    /// Success response without the required token and user fields
    #[error("{}", messages::INVALID_LOGIN_RESPONSE)]
    InvalidResponse,
    /// No backend reachable
    #[error("{}", messages::API_UNREACHABLE)]
    Unreachable,
}

/// Credential login client built on a discovered API base
pub struct LoginClient {
    discovery: Arc<ApiDiscovery>,
    http: Client,
}

impl LoginClient {
    /// Create a login client over a discovery instance
    #[must_use]
    pub fn new(discovery: Arc<ApiDiscovery>) -> Self {
        Self {
            discovery,
            http: Client::new(),
        }
    }

    /// Access the discovery instance
    #[must_use]
    pub fn discovery(&self) -> &Arc<ApiDiscovery> {
        &self.discovery
    }

    /// Perform the credential login.
    ///
    /// Validates the fields, awaits the discovered base, posts the
    /// credentials, and on success persists token, serialized user, and the
    /// confirmed API base before returning the session.
    ///
    /// # Errors
    ///
    /// Returns a [`LoginError`] whose display form is the inline message to
    /// show the user.
    pub async fn login(&self, username: &str, password: &str) -> Result<Session, LoginError> {
        if username.trim().is_empty() || password.trim().is_empty() {
            return Err(LoginError::MissingCredentials);
        }

        let base = self.discovery.discover().await;
        let url = format!("{base}{}", discovery::LOGIN_PATH);

        let response = self
            .http
            .post(&url)
            .json(&serde_json::json!({ "username": username, "password": password }))
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, base, "login request failed to reach the API");
                LoginError::Unreachable
            })?;

        let status = response.status();
        let body: Value = response.json().await.unwrap_or(Value::Null);

        if !status.is_success() {
            let message = body
                .get("error")
                .and_then(Value::as_str)
                .map_or_else(|| messages::INVALID_CREDENTIALS.to_owned(), str::to_owned);
            return Err(LoginError::InvalidCredentials(message));
        }

        let token = body.get("token").and_then(Value::as_str);
        let user = body.get("user").filter(|user| user.is_object());
        let (Some(token), Some(user)) = (token, user) else {
            return Err(LoginError::InvalidResponse);
        };

        let store = self.discovery.store();
        store.put(session_keys::AUTH_TOKEN, token);
        store.put(session_keys::USER, &user.to_string());
        store.put(session_keys::API_BASE, &base);

        Ok(Session {
            token: token.to_owned(),
            user: user.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidates_follow_documented_order() {
        let hints = DiscoveryHints {
            meta_base: Some("http://app.local/api/".into()),
            origin: Some("http://192.168.0.10:5173".into()),
        };
        let candidates = candidate_bases(Some("http://stored:3001"), &hints);
        assert_eq!(
            candidates,
            vec![
                "http://stored:3001",
                "http://app.local/api",
                "http://192.168.0.10:5173",
                "http://192.168.0.10",
                "http://192.168.0.10:3001",
                "http://localhost:3001",
                "http://127.0.0.1:3001",
            ]
        );
    }

    #[test]
    fn trailing_slash_duplicates_collapse() {
        let hints = DiscoveryHints {
            meta_base: Some("http://localhost:3001/".into()),
            origin: None,
        };
        let candidates = candidate_bases(Some("http://localhost:3001"), &hints);
        assert_eq!(
            candidates,
            vec!["http://localhost:3001", "http://127.0.0.1:3001"]
        );
    }

    #[test]
    fn empty_hints_yield_loopback_fallbacks_only() {
        let candidates = candidate_bases(None, &DiscoveryHints::default());
        assert_eq!(
            candidates,
            vec!["http://localhost:3001", "http://127.0.0.1:3001"]
        );
    }

    #[test]
    fn existing_session_requires_token_and_user_object() {
        let store = MemorySessionStore::new();
        assert!(existing_session(&store).is_none());

        store.put(session_keys::AUTH_TOKEN, "tok");
        assert!(existing_session(&store).is_none());

        store.put(session_keys::USER, "\"not-an-object\"");
        assert!(existing_session(&store).is_none());

        store.put(session_keys::USER, r#"{"username":"maria"}"#);
        let session = existing_session(&store).unwrap();
        assert_eq!(session.token, "tok");
        assert_eq!(session.user["username"], "maria");
    }
}
