use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::test_utils::TestContext;

#[tokio::test]
async fn test_health_check() {
    let ctx = TestContext::new().await;

    let response = ctx.server.get("/").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "status": "ok!" }));
}

#[tokio::test]
async fn test_create_parking_slots() {
    let ctx = TestContext::new().await;

    let response = ctx
        .server
        .post("/parking-slots/create")
        .json(&json!([
            { "slot_number": 1, "is_free": true },
            { "slot_number": 2, "is_free": true },
        ]))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "slots_created": 2 }));
}

#[tokio::test]
async fn test_get_free_parking_slots() {
    let ctx = TestContext::new().await;
    ctx.create_slots(&[1, 2]).await;

    let response = ctx.server.get("/parking-slots/free").await;

    response.assert_status_ok();
    let slots = response.json::<Vec<Value>>();
    assert_eq!(slots.len(), 2);
    assert!(slots.iter().all(|slot| slot["is_free"] == json!(true)));
    assert!(slots.iter().all(|slot| slot["license_plate"].is_null()));
}

#[tokio::test]
async fn test_free_slots_on_empty_table_is_not_found() {
    let ctx = TestContext::new().await;

    let response = ctx.server.get("/parking-slots/free").await;

    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_json(&json!({ "error": "No free parking slots available" }));
}

#[tokio::test]
async fn test_free_slot_count() {
    let ctx = TestContext::new().await;

    let response = ctx.server.get("/parking-slots/free/count").await;
    response.assert_status_ok();
    assert_eq!(response.json::<i64>(), 0);

    ctx.create_slots(&[1, 2, 3]).await;
    ctx.register_car("AA-111-AA").await;
    ctx.park("AA-111-AA", 2).await;

    let response = ctx.server.get("/parking-slots/free/count").await;
    response.assert_status_ok();
    assert_eq!(response.json::<i64>(), 2);
}

#[tokio::test]
async fn test_get_parking_slot_by_id() {
    let ctx = TestContext::new().await;
    ctx.create_slots(&[7]).await;

    let response = ctx.server.get("/parking-slots/1").await;

    response.assert_status_ok();
    let slot = response.json::<Value>();
    assert_eq!(slot["id"], json!(1));
    assert_eq!(slot["slot_number"], json!(7));
    assert_eq!(slot["is_free"], json!(true));
    assert_eq!(slot["license_plate"], Value::Null);
}

#[tokio::test]
async fn test_missing_parking_slot_is_not_found() {
    let ctx = TestContext::new().await;

    ctx.server
        .get("/parking-slots/99")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_invalid_batch_creates_nothing() {
    let ctx = TestContext::new().await;

    let response = ctx
        .server
        .post("/parking-slots/create")
        .json(&json!([
            { "slot_number": 1 },
            { "slot_number": 2, "is_free": true, "license_plate": "AA-111-AA" },
        ]))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let response = ctx.server.get("/parking-slots/free/count").await;
    assert_eq!(response.json::<i64>(), 0);
}

#[tokio::test]
async fn test_occupied_slot_can_be_created_with_plate() {
    let ctx = TestContext::new().await;

    ctx.server
        .post("/parking-slots/create")
        .json(&json!([{ "slot_number": 1, "is_free": false, "license_plate": "AA-111-AA" }]))
        .await
        .assert_status_ok();

    let slot = ctx.server.get("/parking-slots/1").await.json::<Value>();
    assert_eq!(slot["is_free"], json!(false));
    assert_eq!(slot["license_plate"], json!("AA-111-AA"));
}

#[tokio::test]
async fn test_blank_plate_on_free_slot_is_stored_as_none() {
    let ctx = TestContext::new().await;

    let response = ctx
        .server
        .post("/parking-slots/create")
        .json(&json!([{ "slot_number": 1, "is_free": true, "license_plate": "" }]))
        .await;
    response.assert_status_ok();
    response.assert_json(&json!({ "slots_created": 1 }));

    let slot = ctx.server.get("/parking-slots/1").await.json::<Value>();
    assert_eq!(slot["is_free"], json!(true));
    assert_eq!(slot["license_plate"], Value::Null);
}

#[tokio::test]
async fn test_blank_plate_on_occupied_slot_is_rejected() {
    let ctx = TestContext::new().await;

    ctx.server
        .post("/parking-slots/create")
        .json(&json!([{ "slot_number": 1, "is_free": false, "license_plate": "  " }]))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}
