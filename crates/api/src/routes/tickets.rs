use axum::{
    Router,
    routing::{delete, get, post, put},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/tickets/create", post(handlers::tickets::create_ticket))
        .route("/tickets/:id", get(handlers::tickets::get_ticket))
        .route("/tickets/pay/:id", put(handlers::tickets::pay_ticket))
        .route("/tickets/cancel/:id", delete(handlers::tickets::cancel_ticket))
}
