use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::test_utils::TestContext;

#[tokio::test]
async fn test_create_car_then_fetch_by_plate() {
    let ctx = TestContext::new().await;

    let response = ctx
        .server
        .post("/cars/create")
        .json(&json!({ "license_plate": "AA-111-AA" }))
        .await;
    response.assert_status_ok();
    response.assert_json(&json!({ "message": "Car created successfully" }));

    let response = ctx.server.get("/cars/AA-111-AA").await;
    response.assert_status_ok();
    let car = response.json::<Value>();
    assert_eq!(car["license_plate"], json!("AA-111-AA"));
    assert!(car["id"].is_i64());
    assert_eq!(car["deleted_at"], Value::Null);
}

#[tokio::test]
async fn test_create_existing_car_is_still_ok() {
    let ctx = TestContext::new().await;
    ctx.register_car("AA-111-AA").await;

    let response = ctx
        .server
        .post("/cars/create")
        .json(&json!({ "license_plate": "AA-111-AA" }))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "message": "Car already exists" }));
}

#[tokio::test]
async fn test_unknown_car_is_not_found() {
    let ctx = TestContext::new().await;

    let response = ctx.server.get("/cars/ZZ-000-ZZ").await;

    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_json(&json!({ "error": "Car not found" }));
}

#[tokio::test]
async fn test_blank_plate_is_rejected() {
    let ctx = TestContext::new().await;

    let response = ctx
        .server
        .post("/cars/create")
        .json(&json!({ "license_plate": "  " }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}
