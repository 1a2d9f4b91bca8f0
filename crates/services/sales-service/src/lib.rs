//! Sales Service Library
//!
//! REST API over clients and their orders (commandes), backed by SeaORM.
//! Runs against Postgres in production and in-memory SQLite in tests.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod infra;
pub mod openapi;
pub mod repository;
pub mod routes;
pub mod service;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tracing::info;

use crate::config::SalesServiceConfig;
use crate::infra::Database;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the HTTP application on top of an open database.
pub fn build_app(database: Database, config: SalesServiceConfig) -> Router {
    let state = AppState::from_database(Arc::new(database), config);
    create_router(state)
}

/// Run the HTTP server with the given configuration.
pub async fn run_server(config: SalesServiceConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Initialize database
    let database = Database::connect(&config.database).await?;

    // Build address
    let addr: SocketAddr = config.server_addr().parse()?;
    let app = build_app(database, config);

    info!("Sales service listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(action: MigrateAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = SalesServiceConfig::from_env();
    let db = Database::connect_without_migrations(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}
