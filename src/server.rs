// ABOUTME: HTTP server assembly: shared resources, router construction, graceful shutdown
// ABOUTME: Merges the health, auth, and food search route modules behind CORS and tracing layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymPulse

//! Server assembly

use crate::auth::AuthManager;
use crate::config::ServerConfig;
use crate::database::Database;
use crate::food_search::{FoodSearchService, OpenFoodFactsSource, TacoSource};
use crate::routes::{auth::AuthRoutes, foods::FoodRoutes, health::HealthRoutes};
use anyhow::{Context, Result};
use axum::Router;
use http::{header::CONTENT_TYPE, Method};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Shared state handed to every route module
pub struct ServerResources {
    /// Database handle
    pub database: Arc<Database>,
    /// Session token manager
    pub auth: AuthManager,
    /// Loaded configuration
    pub config: Arc<ServerConfig>,
    /// Food lookup chain
    pub food_search: FoodSearchService,
}

impl ServerResources {
    /// Create resources with the default food source chain: local TACO table
    /// first, Open Food Facts fallback second
    #[must_use]
    pub fn new(database: Arc<Database>, auth: AuthManager, config: Arc<ServerConfig>) -> Self {
        let food_search = FoodSearchService::new(vec![
            Arc::new(TacoSource::new(database.clone())),
            Arc::new(OpenFoodFactsSource::new(config.food_api.clone())),
        ]);

        Self {
            database,
            auth,
            config,
            food_search,
        }
    }
}

/// Build the application router
pub fn router(resources: Arc<ServerResources>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .allow_origin(Any);

    Router::new()
        .merge(HealthRoutes::routes())
        .merge(AuthRoutes::routes(resources.clone()))
        .merge(FoodRoutes::routes(resources))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// HTTP server wrapper
pub struct HttpServer {
    resources: Arc<ServerResources>,
}

impl HttpServer {
    /// Create a server over shared resources
    #[must_use]
    pub fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Bind and serve until a shutdown signal arrives
    ///
    /// # Errors
    ///
    /// Returns an error if binding or serving fails.
    pub async fn run(self) -> Result<()> {
        let port = self.resources.config.http_port;
        let address = format!("0.0.0.0:{port}");

        let listener = TcpListener::bind(&address)
            .await
            .with_context(|| format!("failed to bind {address}"))?;
        info!(%address, "server listening");

        axum::serve(listener, router(self.resources))
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("server terminated unexpectedly")?;

        info!("server shut down");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("received ctrl-c, shutting down");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
                info!("received terminate signal, shutting down");
            }
            Err(e) => tracing::error!(error = %e, "failed to install signal handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
