// ABOUTME: Server binary for the IronLog workout tracking API
// ABOUTME: Loads configuration, initializes logging and the database, then serves HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

//! # IronLog API Server Binary

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use ironlog_server::{
    auth::AuthManager, config::ServerConfig, database::Database, logging,
    resources::ServerResources, server::IronLogServer,
};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "ironlog-server")]
#[command(about = "IronLog - workout logging and progress analytics API")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL
    #[arg(long)]
    database_url: Option<String>,
}

fn display_available_endpoints(config: &ServerConfig) {
    let prefix = &config.api_prefix;
    info!("=== Available API Endpoints ===");
    info!("Auth:      POST {prefix}/auth/register | login | test-token | forgot-password | reset-password");
    info!("Users:     GET|PUT|DELETE {prefix}/users/me");
    info!("Workouts:  {prefix}/workouts[/:id]");
    info!("Exercises: {prefix}/exercises[/:id], {prefix}/exercises/by-workout/:workout_id");
    info!("Logs:      {prefix}/exercise-logs[/:id], {prefix}/exercise-logs/by-exercise/:exercise_id");
    info!("Progress:  GET {prefix}/progress/exercise/:id, GET {prefix}/progress/workout/:id");
    info!("Health:    GET /health, GET /ready");
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(database_url) = args.database_url {
        config.database.url = database_url;
    }

    logging::init_from_env()?;
    info!("Starting IronLog server");
    info!("{}", config.summary());

    let database = Database::new(&config.database.url).await?;
    info!("Database initialized: {}", config.database.url);

    let auth_manager = AuthManager::new(
        config.auth.jwt_secret.as_bytes(),
        config.auth.jwt_expiry_hours,
    );

    let port = config.http_port;
    display_available_endpoints(&config);

    let resources = Arc::new(ServerResources::new(
        database,
        auth_manager,
        Arc::new(config),
    ));

    if let Err(e) = IronLogServer::new(resources).run(port).await {
        error!("Server error: {e:#}");
        return Err(e);
    }

    Ok(())
}
