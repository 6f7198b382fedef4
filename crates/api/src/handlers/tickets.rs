use axum::{
    Json,
    extract::{Path, State},
};
use parking_core::{
    lifecycle,
    models::{
        MessageResponse,
        ticket::{CreateTicketRequest, PayTicketResponse, Ticket},
    },
};
use std::sync::Arc;

use crate::{ApiState, middleware::error_handling::AppError};

#[axum::debug_handler]
pub async fn create_ticket(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateTicketRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let now = state.clock.now();

    let mut tx = state.store.begin().await?;
    let receipt = lifecycle::create_ticket(&mut *tx, &payload, now).await?;
    tx.commit().await?;

    Ok(Json(MessageResponse::new(receipt.message())))
}

#[axum::debug_handler]
pub async fn get_ticket(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<i64>,
) -> Result<Json<Ticket>, AppError> {
    let mut tx = state.store.begin().await?;
    let ticket = lifecycle::get_ticket(&mut *tx, id).await?;
    tx.commit().await?;

    Ok(Json(ticket))
}

#[axum::debug_handler]
pub async fn pay_ticket(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<i64>,
) -> Result<Json<PayTicketResponse>, AppError> {
    let now = state.clock.now();

    let mut tx = state.store.begin().await?;
    let payment = lifecycle::pay_ticket(&mut *tx, id, now).await?;
    tx.commit().await?;

    Ok(Json(PayTicketResponse {
        message: payment.message().to_string(),
        price: payment.fee.to_string(),
    }))
}

#[axum::debug_handler]
pub async fn cancel_ticket(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    let now = state.clock.now();

    let mut tx = state.store.begin().await?;
    lifecycle::cancel_ticket(&mut *tx, id, now).await?;
    tx.commit().await?;

    Ok(Json(MessageResponse::new("Ticket canceled successfully")))
}
