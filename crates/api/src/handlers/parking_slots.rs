use axum::{
    Json,
    extract::{Path, State},
};
use parking_core::{
    allocation,
    models::slot::{CreateSlotsResponse, NewParkingSlot, ParkingSlot},
};
use std::sync::Arc;

use crate::{ApiState, middleware::error_handling::AppError};

#[axum::debug_handler]
pub async fn create_parking_slots(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<Vec<NewParkingSlot>>,
) -> Result<Json<CreateSlotsResponse>, AppError> {
    let now = state.clock.now();

    let mut tx = state.store.begin().await?;
    let slots_created = allocation::create_slots(&mut *tx, &payload, now).await?;
    tx.commit().await?;

    Ok(Json(CreateSlotsResponse { slots_created }))
}

#[axum::debug_handler]
pub async fn get_free_parking_slots(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<ParkingSlot>>, AppError> {
    let mut tx = state.store.begin().await?;
    let slots = allocation::list_free(&mut *tx).await?;
    tx.commit().await?;

    Ok(Json(slots))
}

#[axum::debug_handler]
pub async fn count_free_parking_slots(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<i64>, AppError> {
    let mut tx = state.store.begin().await?;
    let count = allocation::count_free(&mut *tx).await?;
    tx.commit().await?;

    Ok(Json(count))
}

#[axum::debug_handler]
pub async fn get_parking_slot(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<i64>,
) -> Result<Json<ParkingSlot>, AppError> {
    let mut tx = state.store.begin().await?;
    let slot = allocation::get_slot(&mut *tx, id).await?;
    tx.commit().await?;

    Ok(Json(slot))
}
