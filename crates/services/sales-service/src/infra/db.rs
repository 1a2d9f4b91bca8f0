//! Database connection and initialization.

use std::collections::HashSet;
use std::time::Duration;

use common::DatabaseConfig;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database as SeaDatabase, DatabaseConnection, DbErr,
    Statement,
};
use sea_orm_migration::MigratorTrait;

use super::migrations::Migrator;

/// Lifetime and idle timeout of the single SQLite connection.
///
/// An in-memory database lives only as long as its connection, so the pool
/// must never recycle it.
const SQLITE_CONNECTION_LIFETIME: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

fn connect_options(config: &DatabaseConfig) -> ConnectOptions {
    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(config.max_connections)
        .min_connections(config.min_connections);

    if config.is_sqlite() {
        // SQLite LIKE is case-insensitive by default, Postgres LIKE is not
        options
            .max_connections(1)
            .min_connections(1)
            .max_lifetime(SQLITE_CONNECTION_LIFETIME)
            .idle_timeout(SQLITE_CONNECTION_LIFETIME)
            .map_sqlx_sqlite_opts(|opts| opts.pragma("case_sensitive_like", "ON"));
    }

    options
}

/// Database wrapper for connection management
#[derive(Clone)]
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    /// Initialize database connection and run migrations.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DbErr> {
        let db = Self::connect_without_migrations(config).await?;

        // Run pending migrations
        Migrator::up(&db.connection, None).await?;
        tracing::info!("Database connected and migrations applied");

        Ok(db)
    }

    /// Connect without running migrations (for CLI commands).
    pub async fn connect_without_migrations(config: &DatabaseConfig) -> Result<Self, DbErr> {
        let connection = SeaDatabase::connect(connect_options(config)).await?;

        tracing::debug!(
            backend = ?connection.get_database_backend(),
            "Database connection established"
        );

        Ok(Self { connection })
    }

    /// Get a clone of the database connection.
    pub fn get_connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }

    /// Run pending migrations.
    pub async fn run_migrations(&self) -> Result<(), DbErr> {
        Migrator::up(&self.connection, None).await
    }

    /// Rollback the last migration.
    pub async fn rollback_migration(&self) -> Result<(), DbErr> {
        Migrator::down(&self.connection, Some(1)).await
    }

    /// Get migration status (list all migrations with applied status).
    pub async fn migration_status(&self) -> Result<Vec<(String, bool)>, DbErr> {
        use sea_orm::{EntityTrait, QueryOrder};
        use sea_orm_migration::seaql_migrations;

        let applied: HashSet<String> = seaql_migrations::Entity::find()
            .order_by_asc(seaql_migrations::Column::Version)
            .all(&self.connection)
            .await?
            .into_iter()
            .map(|m| m.version)
            .collect();

        let migrations = Migrator::migrations()
            .iter()
            .map(|m| {
                let name = m.name().to_string();
                let is_applied = applied.contains(&name);
                (name, is_applied)
            })
            .collect();

        Ok(migrations)
    }

    /// Reset database and run all migrations fresh.
    pub async fn fresh_migrations(&self) -> Result<(), DbErr> {
        Migrator::fresh(&self.connection).await
    }

    /// Check database connectivity by executing a simple query.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.connection
            .execute(Statement::from_string(
                self.connection.get_database_backend(),
                "SELECT 1".to_string(),
            ))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlite_connection_is_never_recycled() {
        let options = connect_options(&DatabaseConfig::with_url("sqlite::memory:"));

        assert_eq!(options.get_max_connections(), Some(1));
        assert_eq!(options.get_max_lifetime(), Some(SQLITE_CONNECTION_LIFETIME));
        assert_eq!(options.get_idle_timeout(), Some(SQLITE_CONNECTION_LIFETIME));
    }

    #[test]
    fn test_postgres_keeps_configured_pool() {
        let mut config = DatabaseConfig::with_url("postgres://localhost/sales");
        config.max_connections = 8;

        let options = connect_options(&config);

        assert_eq!(options.get_max_connections(), Some(8));
        assert_eq!(options.get_max_lifetime(), None);
    }

    #[tokio::test]
    async fn test_sqlite_like_is_case_sensitive() {
        let db = Database::connect_without_migrations(&DatabaseConfig::with_url("sqlite::memory:"))
            .await
            .unwrap();
        let connection = db.get_connection();

        let row = connection
            .query_one(Statement::from_string(
                connection.get_database_backend(),
                "SELECT 'a' LIKE 'A' AS matched".to_string(),
            ))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(row.try_get::<i32>("", "matched").unwrap(), 0);
    }
}
