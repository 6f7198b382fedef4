//! # Error Handling Middleware
//!
//! Maps [`ParkingError`] values to HTTP status codes and JSON error bodies so
//! every endpoint fails the same way:
//!
//! | Error        | Status |
//! |--------------|--------|
//! | `NotFound`   | 404    |
//! | `Conflict`   | 400    |
//! | `Validation` | 400    |
//! | `Database`   | 500    |
//! | `Internal`   | 500    |
//!
//! A slot that cannot be taken is reported as 400 rather than 409; existing
//! clients rely on that status.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use parking_core::errors::ParkingError;
use serde_json::json;
use tracing::error;

/// Application error wrapper that provides HTTP status code mapping
///
/// # Example
///
/// ```
/// use axum::Json;
/// use parking_api::middleware::error_handling::AppError;
/// use parking_core::errors::ParkingError;
///
/// async fn handler(found: bool) -> Result<Json<u32>, AppError> {
///     if !found {
///         return Err(AppError(ParkingError::NotFound("Parking slot not found".to_string())));
///     }
///     Ok(Json(1))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub ParkingError);

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match &self.0 {
            ParkingError::NotFound(_) => StatusCode::NOT_FOUND,
            ParkingError::Conflict(_) => StatusCode::BAD_REQUEST,
            ParkingError::Validation(_) => StatusCode::BAD_REQUEST,
            ParkingError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ParkingError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Client-facing errors carry their own message; internal details stay in the logs
        let message = match &self.0 {
            ParkingError::NotFound(msg)
            | ParkingError::Conflict(msg)
            | ParkingError::Validation(msg) => msg.clone(),
            ParkingError::Database(report) => {
                error!(error = ?report, "Database error");
                "A database error occurred".to_string()
            }
            ParkingError::Internal(err) => {
                error!(error = %err, "Internal error");
                "Internal server error".to_string()
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Allows `?` on `ParkingResult` inside handlers.
impl From<ParkingError> for AppError {
    fn from(err: ParkingError) -> Self {
        AppError(err)
    }
}

/// Allows `?` on store calls (`begin`, `commit`) inside handlers.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(ParkingError::Database(err))
    }
}

/// Maps a ParkingError to an HTTP response
pub fn map_error(err: ParkingError) -> Response {
    AppError(err).into_response()
}
