use color_eyre::eyre::Result;
use dotenv::dotenv;
use parking_db::{DatabaseConfig, create_pool, schema::initialize_database};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();
    parking_api::init_tracing(tracing::Level::INFO)?;

    let config = DatabaseConfig::from_env()?;

    info!("Connecting to {}...", config.describe());
    let db_pool = create_pool(&config).await?;

    initialize_database(&db_pool).await?;
    db_pool.close().await;

    Ok(())
}
