use eyre::Result;
use sqlx::{Pool, Postgres, Sqlite};
use tracing::info;

use crate::DbPool;

const POSTGRES_SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS parking_slots (
        id BIGSERIAL PRIMARY KEY,
        slot_number INTEGER NOT NULL CHECK (slot_number > 0),
        is_free BOOLEAN NOT NULL DEFAULT TRUE,
        license_plate VARCHAR(255) NULL,
        created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMP WITH TIME ZONE NULL,
        deleted_at TIMESTAMP WITH TIME ZONE NULL,
        CONSTRAINT occupant_matches_state CHECK (is_free = (license_plate IS NULL))
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS cars (
        id BIGSERIAL PRIMARY KEY,
        license_plate VARCHAR(255) NOT NULL UNIQUE,
        created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMP WITH TIME ZONE NULL,
        deleted_at TIMESTAMP WITH TIME ZONE NULL
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS tickets (
        id BIGSERIAL PRIMARY KEY,
        car_id BIGINT NOT NULL REFERENCES cars(id),
        parking_slot_id BIGINT NOT NULL REFERENCES parking_slots(id),
        entry_time TIMESTAMP WITH TIME ZONE NOT NULL,
        exit_time TIMESTAMP WITH TIME ZONE NULL,
        paid BOOLEAN NOT NULL DEFAULT FALSE,
        created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMP WITH TIME ZONE NULL,
        deleted_at TIMESTAMP WITH TIME ZONE NULL
    );
    "#,
    "CREATE INDEX IF NOT EXISTS idx_parking_slots_is_free ON parking_slots(is_free);",
    "CREATE INDEX IF NOT EXISTS idx_tickets_car_id ON tickets(car_id);",
    "CREATE INDEX IF NOT EXISTS idx_tickets_parking_slot_id ON tickets(parking_slot_id);",
    "CREATE UNIQUE INDEX IF NOT EXISTS idx_tickets_one_unpaid_per_slot ON tickets(parking_slot_id) WHERE paid = FALSE;",
];

const SQLITE_SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS parking_slots (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        slot_number INTEGER NOT NULL CHECK (slot_number > 0),
        is_free BOOLEAN NOT NULL DEFAULT TRUE,
        license_plate TEXT NULL,
        created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
        updated_at TIMESTAMP NULL,
        deleted_at TIMESTAMP NULL,
        CONSTRAINT occupant_matches_state CHECK (is_free = (license_plate IS NULL))
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS cars (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        license_plate TEXT NOT NULL UNIQUE,
        created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
        updated_at TIMESTAMP NULL,
        deleted_at TIMESTAMP NULL
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS tickets (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        car_id INTEGER NOT NULL REFERENCES cars(id),
        parking_slot_id INTEGER NOT NULL REFERENCES parking_slots(id),
        entry_time TIMESTAMP NOT NULL,
        exit_time TIMESTAMP NULL,
        paid BOOLEAN NOT NULL DEFAULT FALSE,
        created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
        updated_at TIMESTAMP NULL,
        deleted_at TIMESTAMP NULL
    );
    "#,
    "CREATE INDEX IF NOT EXISTS idx_parking_slots_is_free ON parking_slots(is_free);",
    "CREATE INDEX IF NOT EXISTS idx_tickets_car_id ON tickets(car_id);",
    "CREATE INDEX IF NOT EXISTS idx_tickets_parking_slot_id ON tickets(parking_slot_id);",
    "CREATE UNIQUE INDEX IF NOT EXISTS idx_tickets_one_unpaid_per_slot ON tickets(parking_slot_id) WHERE paid = FALSE;",
];

/// Creates the `parking_slots`, `cars` and `tickets` tables and their indexes
/// if they do not exist yet.
pub async fn initialize_database(pool: &DbPool) -> Result<()> {
    info!("Initializing database schema...");

    match pool {
        DbPool::Postgres(pool) => initialize_postgres(pool).await?,
        DbPool::Sqlite(pool) => initialize_sqlite(pool).await?,
    }

    info!("Database schema initialized successfully.");
    Ok(())
}

async fn initialize_postgres(pool: &Pool<Postgres>) -> Result<()> {
    for statement in POSTGRES_SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}

async fn initialize_sqlite(pool: &Pool<Sqlite>) -> Result<()> {
    for statement in SQLITE_SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}
