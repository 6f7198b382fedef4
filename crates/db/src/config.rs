//! # Database configuration
//!
//! The store runs against one of two targets, chosen explicitly at startup:
//!
//! - a local SQLite file, for development and single-node deployments;
//! - a remote PostgreSQL server.
//!
//! ## Environment Variables
//!
//! - `DB_BACKEND`: `local` (default) or `remote`
//! - `DB_PATH`: SQLite file path for `local` (default: `./parking.db`)
//! - `DB_ENDPOINT`, `DB_USERNAME`, `DB_PASSWORD`: required for `remote`
//! - `DB_PORT` (default: 5432), `DB_NAME` (default: `parkingdb`)
//! - `DB_MAX_CONNECTIONS`: pool size for `remote` (default: 5)

use std::{env, fmt, path::PathBuf};

use eyre::{Result, WrapErr, eyre};

pub const DEFAULT_LOCAL_PATH: &str = "./parking.db";
pub const DEFAULT_PORT: u16 = 5432;
pub const DEFAULT_DATABASE: &str = "parkingdb";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseConfig {
    Local(LocalDatabase),
    Remote(RemoteDatabase),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalDatabase {
    pub path: PathBuf,
}

#[derive(Clone, PartialEq, Eq)]
pub struct RemoteDatabase {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
    pub max_connections: u32,
}

impl fmt::Debug for RemoteDatabase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteDatabase")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("database", &self.database)
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

impl DatabaseConfig {
    pub fn local(path: impl Into<PathBuf>) -> Self {
        DatabaseConfig::Local(LocalDatabase { path: path.into() })
    }

    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name
    /// to its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let backend = lookup("DB_BACKEND").unwrap_or_else(|| "local".to_string());

        match backend.trim().to_ascii_lowercase().as_str() {
            "local" => {
                let path = lookup("DB_PATH").unwrap_or_else(|| DEFAULT_LOCAL_PATH.to_string());
                Ok(Self::local(path))
            }
            "remote" => {
                let required = |key: &str| {
                    lookup(key).ok_or_else(|| eyre!("{} must be set when DB_BACKEND=remote", key))
                };

                let host = required("DB_ENDPOINT")?;
                let username = required("DB_USERNAME")?;
                let password = required("DB_PASSWORD")?;
                let port = match lookup("DB_PORT") {
                    Some(port) => port.parse().wrap_err("Invalid DB_PORT value")?,
                    None => DEFAULT_PORT,
                };
                let database = lookup("DB_NAME").unwrap_or_else(|| DEFAULT_DATABASE.to_string());
                let max_connections = match lookup("DB_MAX_CONNECTIONS") {
                    Some(value) => value.parse().wrap_err("Invalid DB_MAX_CONNECTIONS value")?,
                    None => DEFAULT_MAX_CONNECTIONS,
                };

                Ok(DatabaseConfig::Remote(RemoteDatabase {
                    host,
                    port,
                    username,
                    password,
                    database,
                    max_connections,
                }))
            }
            other => Err(eyre!(
                "Unknown DB_BACKEND value '{}', expected 'local' or 'remote'",
                other
            )),
        }
    }

    /// Human-readable target for logs. Never includes credentials.
    pub fn describe(&self) -> String {
        match self {
            DatabaseConfig::Local(local) => format!("sqlite:{}", local.path.display()),
            DatabaseConfig::Remote(remote) => format!(
                "postgres://{}:{}/{}",
                remote.host, remote.port, remote.database
            ),
        }
    }
}
