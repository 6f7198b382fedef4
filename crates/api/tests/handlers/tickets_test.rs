use axum::http::StatusCode;
use chrono::Duration;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};

use crate::test_utils::{TestContext, start_time, ticket_id_from_message};

#[test_log::test(tokio::test)]
async fn test_park_and_pay_scenario() {
    let ctx = TestContext::new().await;
    ctx.create_slots(&[1]).await;
    ctx.register_car("AA-111-AA").await;

    let response = ctx
        .server
        .post("/tickets/create")
        .json(&json!({ "license_plate": "AA-111-AA", "parking_slot_id": 1 }))
        .await;
    response.assert_status_ok();
    let message = response.json::<Value>()["message"].as_str().unwrap().to_string();
    assert!(message.ends_with("car parked at slot: 1"));
    let ticket_id = ticket_id_from_message(&message);

    let slot = ctx.server.get("/parking-slots/1").await.json::<Value>();
    assert_eq!(slot["is_free"], json!(false));
    assert_eq!(slot["license_plate"], json!("AA-111-AA"));

    let ticket = ctx.server.get(&format!("/tickets/{ticket_id}")).await.json::<Value>();
    assert_eq!(ticket["paid"], json!(false));
    assert_eq!(ticket["exit_time"], Value::Null);
    assert_eq!(ticket["parking_slot_id"], json!(1));

    ctx.clock.advance(Duration::minutes(75));

    let response = ctx.server.put(&format!("/tickets/pay/{ticket_id}")).await;
    response.assert_status_ok();
    response.assert_json(&json!({ "message": "Ticket paid successfully", "Price": "10 Euro" }));

    let slot = ctx.server.get("/parking-slots/1").await.json::<Value>();
    assert_eq!(slot["is_free"], json!(true));
    assert_eq!(slot["license_plate"], Value::Null);

    let ticket = ctx.server.get(&format!("/tickets/{ticket_id}")).await.json::<Value>();
    assert_eq!(ticket["paid"], json!(true));
    assert!(ticket["exit_time"].is_string());
}

#[rstest]
#[case::exactly_one_hour(3600, "5 Euro")]
#[case::one_second_over(3601, "10 Euro")]
#[case::zero_length_stay(0, "0 Euro")]
#[tokio::test]
async fn test_fee_for_recorded_times(#[case] stay_seconds: i64, #[case] expected: &str) {
    let ctx = TestContext::new().await;
    ctx.create_slots(&[1]).await;
    ctx.register_car("AA-111-AA").await;

    let entry = start_time();
    let exit = entry + Duration::seconds(stay_seconds);
    let response = ctx
        .server
        .post("/tickets/create")
        .json(&json!({
            "license_plate": "AA-111-AA",
            "parking_slot_id": 1,
            "entry_time": entry,
            "exit_time": exit,
        }))
        .await;
    response.assert_status_ok();
    let ticket_id = ticket_id_from_message(response.json::<Value>()["message"].as_str().unwrap());

    let response = ctx.server.put(&format!("/tickets/pay/{ticket_id}")).await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["Price"], json!(expected));
}

#[tokio::test]
async fn test_paying_twice_reports_same_fee() {
    let ctx = TestContext::new().await;
    ctx.create_slots(&[1]).await;
    ctx.register_car("AA-111-AA").await;
    let ticket_id = ctx.park("AA-111-AA", 1).await;

    ctx.clock.advance(Duration::minutes(20));
    let first = ctx.server.put(&format!("/tickets/pay/{ticket_id}")).await;
    first.assert_status_ok();

    ctx.clock.advance(Duration::hours(5));
    let second = ctx.server.put(&format!("/tickets/pay/{ticket_id}")).await;
    second.assert_status_ok();

    assert_eq!(first.json::<Value>()["Price"], json!("5 Euro"));
    second.assert_json(&json!({ "message": "Ticket has already been paid", "Price": "5 Euro" }));
}

#[tokio::test]
async fn test_ticket_on_occupied_slot_is_rejected() {
    let ctx = TestContext::new().await;
    ctx.create_slots(&[1]).await;
    ctx.register_car("AA-111-AA").await;
    ctx.register_car("BB-222-BB").await;
    ctx.park("AA-111-AA", 1).await;

    let response = ctx
        .server
        .post("/tickets/create")
        .json(&json!({ "license_plate": "BB-222-BB", "parking_slot_id": 1 }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "Parking slot is not free" }));
}

#[tokio::test]
async fn test_ticket_on_occupied_slot_is_rejected_even_for_unknown_car() {
    let ctx = TestContext::new().await;
    ctx.create_slots(&[1]).await;
    ctx.register_car("AA-111-AA").await;
    ctx.park("AA-111-AA", 1).await;

    let response = ctx
        .server
        .post("/tickets/create")
        .json(&json!({ "license_plate": "ZZ-000-ZZ", "parking_slot_id": 1 }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_ticket_on_missing_slot_is_rejected() {
    let ctx = TestContext::new().await;
    ctx.register_car("AA-111-AA").await;

    ctx.server
        .post("/tickets/create")
        .json(&json!({ "license_plate": "AA-111-AA", "parking_slot_id": 42 }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_ticket_for_unregistered_car_is_not_found() {
    let ctx = TestContext::new().await;
    ctx.create_slots(&[1]).await;

    let response = ctx
        .server
        .post("/tickets/create")
        .json(&json!({ "license_plate": "ZZ-000-ZZ", "parking_slot_id": 1 }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_json(&json!({
        "error": "Car not registered, please register the car first"
    }));

    // The slot was not touched
    let slot = ctx.server.get("/parking-slots/1").await.json::<Value>();
    assert_eq!(slot["is_free"], json!(true));
}

#[tokio::test]
async fn test_exit_before_entry_is_rejected() {
    let ctx = TestContext::new().await;
    ctx.create_slots(&[1]).await;
    ctx.register_car("AA-111-AA").await;

    let entry = start_time();
    ctx.server
        .post("/tickets/create")
        .json(&json!({
            "license_plate": "AA-111-AA",
            "parking_slot_id": 1,
            "entry_time": entry,
            "exit_time": entry - Duration::minutes(1),
        }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let count = ctx.server.get("/parking-slots/free/count").await.json::<i64>();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_cancel_frees_slot_and_removes_ticket() {
    let ctx = TestContext::new().await;
    ctx.create_slots(&[1]).await;
    ctx.register_car("AA-111-AA").await;
    let ticket_id = ctx.park("AA-111-AA", 1).await;

    ctx.clock.advance(Duration::hours(3));
    let response = ctx.server.delete(&format!("/tickets/cancel/{ticket_id}")).await;
    response.assert_status_ok();
    response.assert_json(&json!({ "message": "Ticket canceled successfully" }));

    ctx.server
        .get(&format!("/tickets/{ticket_id}"))
        .await
        .assert_status(StatusCode::NOT_FOUND);

    let slot = ctx.server.get("/parking-slots/1").await.json::<Value>();
    assert_eq!(slot["is_free"], json!(true));
    assert_eq!(slot["license_plate"], Value::Null);

    // The slot can be taken again straight away
    ctx.park("AA-111-AA", 1).await;
}

#[tokio::test]
async fn test_slot_is_reusable_after_payment() {
    let ctx = TestContext::new().await;
    ctx.create_slots(&[1]).await;
    ctx.register_car("AA-111-AA").await;
    ctx.register_car("BB-222-BB").await;

    let first = ctx.park("AA-111-AA", 1).await;
    ctx.server
        .put(&format!("/tickets/pay/{first}"))
        .await
        .assert_status_ok();

    let second = ctx.park("BB-222-BB", 1).await;
    assert!(second > first);

    // Cancelling the old paid ticket must not free the slot the new car holds
    ctx.server
        .delete(&format!("/tickets/cancel/{first}"))
        .await
        .assert_status_ok();
    let slot = ctx.server.get("/parking-slots/1").await.json::<Value>();
    assert_eq!(slot["is_free"], json!(false));
    assert_eq!(slot["license_plate"], json!("BB-222-BB"));
}

#[tokio::test]
async fn test_unknown_ticket_is_not_found_everywhere() {
    let ctx = TestContext::new().await;

    ctx.server
        .get("/tickets/404")
        .await
        .assert_status(StatusCode::NOT_FOUND);
    ctx.server
        .put("/tickets/pay/404")
        .await
        .assert_status(StatusCode::NOT_FOUND);
    ctx.server
        .delete("/tickets/cancel/404")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
