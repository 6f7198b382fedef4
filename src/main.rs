use color_eyre::eyre::Result;
use dotenv::dotenv;
use parking_api::config::ApiConfig;
use parking_db::{create_pool, schema::initialize_database};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;
    parking_api::init_tracing(config.log_level)?;

    // Create database connection pool
    let db_pool = create_pool(&config.database).await?;

    // Initialize database schema
    initialize_database(&db_pool).await?;

    // Start API server
    parking_api::start_server(config, db_pool.into_store()).await?;

    Ok(())
}
