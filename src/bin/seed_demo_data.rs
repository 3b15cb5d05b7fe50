// ABOUTME: Demo data seeder for local development and testing
// ABOUTME: Populates the TACO nutrition table and creates a demo admin user
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymPulse

//! Demo data seeder.
//!
//! Usage:
//! ```bash
//! cargo run --bin seed-demo-data
//! cargo run --bin seed-demo-data -- --database-url sqlite:gympulse.db?mode=rwc
//! ```

use anyhow::Result;
use clap::Parser;
use gympulse::{
    auth::hash_password,
    database::Database,
    models::{User, UserRole},
};
use tracing::info;

/// Password for the seeded admin account, for local testing only.
const DEMO_ADMIN_PASSWORD: &str = "GymPulse123!";

/// Reference foods from the TACO table, per 100 g.
const TACO_FOODS: [(&str, f64, f64, f64); 12] = [
    ("Arroz, integral, cozido", 124.0, 2.6, 1.0),
    ("Arroz, tipo 1, cozido", 128.0, 2.5, 0.2),
    ("Feijão, carioca, cozido", 76.0, 4.8, 0.5),
    ("Feijão, preto, cozido", 77.0, 4.5, 0.5),
    ("Frango, peito, sem pele, grelhado", 159.0, 32.0, 2.5),
    ("Carne, bovina, patinho, grelhado", 219.0, 35.9, 7.3),
    ("Ovo, de galinha, inteiro, cozido", 146.0, 13.3, 9.5),
    ("Banana, prata, crua", 98.0, 1.3, 0.1),
    ("Maçã, Fuji, com casca, crua", 56.0, 0.3, 0.0),
    ("Batata, doce, cozida", 77.0, 0.6, 0.1),
    ("Aveia, flocos, crua", 394.0, 13.9, 8.5),
    ("Leite, de vaca, integral", 61.0, 2.9, 3.2),
];

#[derive(Parser)]
#[command(name = "seed-demo-data", about = "GymPulse demo data seeder")]
struct Args {
    /// Database URL override
    #[arg(long)]
    database_url: Option<String>,

    /// Admin username
    #[arg(long, default_value = "admin")]
    admin_username: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();

    let database_url = args
        .database_url
        .or_else(|| std::env::var("DATABASE_URL").ok())
        .unwrap_or_else(|| "sqlite:gympulse.db?mode=rwc".to_owned());

    let database = Database::new(&database_url).await?;

    for (name, kcal, protein_g, fat_g) in TACO_FOODS {
        database
            .insert_taco_food(name, Some(kcal), Some(protein_g), Some(fat_g))
            .await?;
    }
    info!(count = TACO_FOODS.len(), "seeded TACO foods");

    if database
        .get_user_by_username(&args.admin_username)
        .await?
        .is_none()
    {
        let mut admin = User::new(
            args.admin_username.clone(),
            hash_password(DEMO_ADMIN_PASSWORD)?,
            Some("Administrador".to_owned()),
        );
        admin.role = UserRole::Admin;
        database.create_user(&admin).await?;
        info!(username = %args.admin_username, "created demo admin user");
    } else {
        info!(username = %args.admin_username, "admin user already exists, skipping");
    }

    Ok(())
}
