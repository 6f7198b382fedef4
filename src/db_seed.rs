use chrono::Utc;
use color_eyre::eyre::{Result, WrapErr};
use dotenv::dotenv;
use parking_core::allocation::{self, SeedOutcome};
use parking_db::{DatabaseConfig, create_pool, schema::initialize_database};
use tracing::info;

const DEFAULT_SLOT_COUNT: u32 = 100;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();
    parking_api::init_tracing(tracing::Level::INFO)?;

    let config = DatabaseConfig::from_env()?;
    let slot_count = match std::env::var("SEED_SLOT_COUNT") {
        Ok(value) => value.parse().wrap_err("Invalid SEED_SLOT_COUNT value")?,
        Err(_) => DEFAULT_SLOT_COUNT,
    };

    let db_pool = create_pool(&config).await?;
    initialize_database(&db_pool).await?;
    let store = db_pool.clone().into_store();

    let mut tx = store.begin().await?;
    let outcome = allocation::seed_slots(&mut *tx, slot_count, Utc::now()).await?;
    tx.commit().await?;

    match outcome {
        SeedOutcome::Seeded(count) => info!("Initialized {} parking slots.", count),
        SeedOutcome::AlreadyPresent(count) => info!("{} parking slots already exist.", count),
    }

    db_pool.close().await;
    Ok(())
}
