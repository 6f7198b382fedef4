use axum::{
    Json,
    extract::{Path, State},
};
use parking_core::{
    models::{
        MessageResponse,
        car::{Car, CreateCarRequest},
    },
    registry,
};
use std::sync::Arc;

use crate::{ApiState, middleware::error_handling::AppError};

/// Registers a car. Answers 200 whether or not the plate was already known;
/// only the message differs.
#[axum::debug_handler]
pub async fn create_car(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateCarRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let now = state.clock.now();

    let mut tx = state.store.begin().await?;
    let registration = registry::register_car(&mut *tx, &payload.license_plate, now).await?;
    tx.commit().await?;

    Ok(Json(MessageResponse::new(registration.message())))
}

#[axum::debug_handler]
pub async fn get_car(
    State(state): State<Arc<ApiState>>,
    Path(license_plate): Path<String>,
) -> Result<Json<Car>, AppError> {
    let mut tx = state.store.begin().await?;
    let car = registry::get_car(&mut *tx, &license_plate).await?;
    tx.commit().await?;

    Ok(Json(car))
}
