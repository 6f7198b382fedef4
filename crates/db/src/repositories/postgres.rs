//! Store backed by a remote PostgreSQL server.

use sqlx::Postgres;

sql_store!(PgStore, PgTx, Postgres);
