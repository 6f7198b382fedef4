//! # Parking API
//!
//! The API crate provides the web server implementation for the parking backend.
//! It defines RESTful endpoints for managing parking slots, cars, and tickets.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Open one store transaction per request, call into `parking_core`, commit
//! - **Middleware**: Map domain errors to HTTP responses
//! - **Config**: Handle environment and application configuration
//!
//! The API uses Axum as the web framework and SQLx (through `parking_db`) for storage.

/// Configuration module for API settings
pub mod config;
/// Request handlers that drive the parking operations
pub mod handlers;
/// Middleware for error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::{Router, http::HeaderValue};
use eyre::Result;
use parking_core::{
    clock::{Clock, SystemClock},
    store::ParkingStore,
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{Level, info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    /// Transactional parking store
    pub store: Arc<dyn ParkingStore>,
    /// Source of the per-request timestamp
    pub clock: Arc<dyn Clock>,
}

impl ApiState {
    pub fn new(store: Arc<dyn ParkingStore>) -> Self {
        Self {
            store,
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_clock(store: Arc<dyn ParkingStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }
}

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise everything at `level` and above is logged.
pub fn init_tracing(level: Level) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_ascii_lowercase()));

    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}

/// Builds the application router with all routes attached to `state`
pub fn app(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Parking slot endpoints
        .merge(routes::parking_slots::routes())
        // Car registration endpoints
        .merge(routes::cars::routes())
        // Ticket lifecycle endpoints
        .merge(routes::tickets::routes())
        // Attach shared state to all routes
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::PUT,
            axum::http::Method::DELETE,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ])
        .allow_origin(origins)
}

/// Starts the API server with the provided configuration and store
///
/// # Example
///
/// ```no_run
/// # async fn run() -> eyre::Result<()> {
/// use parking_api::config::ApiConfig;
///
/// let config = ApiConfig::from_env()?;
/// let pool = parking_db::create_pool(&config.database).await?;
/// parking_db::schema::initialize_database(&pool).await?;
/// parking_api::start_server(config, pool.into_store()).await?;
/// # Ok(())
/// # }
/// ```
pub async fn start_server(config: config::ApiConfig, store: Arc<dyn ParkingStore>) -> Result<()> {
    // Create shared state with dependencies
    let state = Arc::new(ApiState::new(store));
    let app = app(state);

    // Apply CORS configuration if origins are specified
    let app = match &config.cors_origins {
        Some(origins) => app.layer(cors_layer(origins)),
        None => app,
    };

    // Request tracing and timeout
    let app = app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout))),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
