use axum::http::StatusCode;
use parking_api::middleware::error_handling::{AppError, map_error};
use parking_core::errors::ParkingError;
use rstest::rstest;

#[rstest]
#[case(ParkingError::NotFound("Ticket not found".to_string()), StatusCode::NOT_FOUND)]
#[case(ParkingError::Conflict("Parking slot is not free".to_string()), StatusCode::BAD_REQUEST)]
#[case(ParkingError::Validation("Invalid input".to_string()), StatusCode::BAD_REQUEST)]
#[case(ParkingError::Database(eyre::eyre!("Database error")), StatusCode::INTERNAL_SERVER_ERROR)]
#[case(
    ParkingError::Internal(Box::new(std::io::Error::new(std::io::ErrorKind::Other, "Internal error"))),
    StatusCode::INTERNAL_SERVER_ERROR
)]
fn test_error_status_mapping(#[case] error: ParkingError, #[case] expected: StatusCode) {
    let response = map_error(error);

    assert_eq!(response.status(), expected);
}

#[test]
fn test_eyre_report_maps_to_database_error() {
    let error: AppError = eyre::eyre!("pool timed out").into();

    assert!(matches!(error.0, ParkingError::Database(_)));
    assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
}
