use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{json, Value};

use crate::test_utils::{role_header, user_header, TestContext};

fn forbidden() -> Value {
    json!({"status": false, "message": "You don't have permission to access"})
}

#[tokio::test]
async fn test_list_holidays_without_role_is_forbidden() {
    let server = TestContext::new().server();

    let response = server.get("/api/holidays").await;

    response.assert_status(StatusCode::FORBIDDEN);
    assert_eq!(response.json::<Value>(), forbidden());
}

#[rstest]
#[case("patient")]
#[case("janitor")]
#[tokio::test]
async fn test_list_holidays_rejects_roles_without_capability(#[case] role: &'static str) {
    let server = TestContext::new().server();
    let (name, value) = role_header(role);

    let response = server.get("/api/holidays").add_header(name, value).await;

    response.assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_doctor_listing_needs_user_id() {
    let server = TestContext::new().server();
    let (name, value) = role_header("doctor");

    let response = server.get("/api/holidays").add_header(name, value).await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.json::<Value>(),
        json!({"status": false, "message": "Missing user id"})
    );
}

#[tokio::test]
async fn test_save_holiday_rejects_reversed_range() {
    let server = TestContext::new().server();
    let (name, value) = role_header("receptionist");

    let response = server
        .post("/api/holidays")
        .add_header(name, value)
        .json(&json!({
            "module_type": "doctor",
            "module_id": 3,
            "start_date": "2024-03-10",
            "end_date": "2024-03-01",
            "description": "Conference"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>(),
        json!({
            "status": false,
            "message": "Holiday start date must not be after its end date"
        })
    );
}

#[tokio::test]
async fn test_save_holiday_as_patient_is_forbidden() {
    let server = TestContext::new().server();
    let (name, value) = role_header("patient");

    let response = server
        .post("/api/holidays")
        .add_header(name, value)
        .json(&json!({
            "module_type": "clinic",
            "module_id": 7,
            "start_date": "2024-03-01",
            "end_date": "2024-03-02"
        }))
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_delete_holiday_with_malformed_user_id() {
    let server = TestContext::new().server();
    let (role, role_value) = role_header("administrator");
    let (user, user_value) = user_header("abc");

    let response = server
        .delete("/api/holidays/5")
        .add_header(role, role_value)
        .add_header(user, user_value)
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}
