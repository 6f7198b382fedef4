use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/cars/create", post(handlers::cars::create_car))
        .route("/cars/:license_plate", get(handlers::cars::get_car))
}
