use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/parking-slots/create",
            post(handlers::parking_slots::create_parking_slots),
        )
        .route(
            "/parking-slots/free",
            get(handlers::parking_slots::get_free_parking_slots),
        )
        .route(
            "/parking-slots/free/count",
            get(handlers::parking_slots::count_free_parking_slots),
        )
        .route(
            "/parking-slots/:id",
            get(handlers::parking_slots::get_parking_slot),
        )
}
