//! # Parking DB
//!
//! SQL implementation of the parking store. The same queries run against a
//! local SQLite file or a remote PostgreSQL server; [`DatabaseConfig`] picks
//! which one at startup.

pub mod config;
pub mod models;
pub mod repositories;
pub mod schema;

use std::sync::Arc;

use eyre::{Result, WrapErr};
use parking_core::store::ParkingStore;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{PgPool, SqlitePool};
use tracing::info;

pub use config::DatabaseConfig;
use repositories::{postgres::PgStore, sqlite::SqliteStore};

#[derive(Debug, Clone)]
pub enum DbPool {
    Postgres(PgPool),
    Sqlite(SqlitePool),
}

impl DbPool {
    /// Wraps the pool in the store implementation matching its backend.
    pub fn into_store(self) -> Arc<dyn ParkingStore> {
        match self {
            DbPool::Postgres(pool) => Arc::new(PgStore::new(pool)),
            DbPool::Sqlite(pool) => Arc::new(SqliteStore::new(pool)),
        }
    }

    pub async fn close(&self) {
        match self {
            DbPool::Postgres(pool) => pool.close().await,
            DbPool::Sqlite(pool) => pool.close().await,
        }
    }
}

pub async fn create_pool(config: &DatabaseConfig) -> Result<DbPool> {
    info!(database = %config.describe(), "Connecting to database");

    let pool = match config {
        DatabaseConfig::Local(local) => {
            let options = SqliteConnectOptions::new()
                .filename(&local.path)
                .create_if_missing(true)
                .foreign_keys(true);

            // SQLite allows one writer at a time; a single connection keeps
            // request transactions strictly sequential instead of failing busy.
            let pool = SqlitePoolOptions::new()
                .max_connections(1)
                .connect_with(options)
                .await
                .wrap_err_with(|| format!("Failed to open {}", local.path.display()))?;
            DbPool::Sqlite(pool)
        }
        DatabaseConfig::Remote(remote) => {
            let options = PgConnectOptions::new()
                .host(&remote.host)
                .port(remote.port)
                .username(&remote.username)
                .password(&remote.password)
                .database(&remote.database);

            let pool = PgPoolOptions::new()
                .max_connections(remote.max_connections)
                .connect_with(options)
                .await
                .wrap_err_with(|| format!("Failed to connect to {}", config.describe()))?;
            DbPool::Postgres(pool)
        }
    };

    Ok(pool)
}
