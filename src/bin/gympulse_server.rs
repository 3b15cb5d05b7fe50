// ABOUTME: GymPulse API server binary
// ABOUTME: Loads configuration, prepares the database, and serves the HTTP API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymPulse

//! # GymPulse API Server
//!
//! Starts the diet/fitness tracking backend: food search, authentication,
//! and health endpoints.

use anyhow::Result;
use clap::Parser;
use gympulse::{
    auth::AuthManager,
    config::ServerConfig,
    database::Database,
    logging,
    server::{HttpServer, ServerResources},
};
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "gympulse-server")]
#[command(about = "GymPulse - diet and fitness tracking API")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(database_url) = args.database_url {
        config.database_url = database_url;
    }

    logging::init_from_env()?;

    info!("starting GymPulse API");
    info!("{}", config.summary());

    let database = Arc::new(Database::new(&config.database_url).await?);
    info!("database ready");

    let auth = AuthManager::new(
        config.auth.jwt_secret.clone().into_bytes(),
        config.auth.jwt_expiry_hours,
    );

    let resources = Arc::new(ServerResources::new(database, auth, Arc::new(config)));

    HttpServer::new(resources).run().await
}
