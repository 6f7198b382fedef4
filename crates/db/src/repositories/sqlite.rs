//! Store backed by a local SQLite file.

use sqlx::Sqlite;

sql_store!(SqliteStore, SqliteTx, Sqlite);
