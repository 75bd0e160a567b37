use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{json, Value};

use crate::test_utils::{role_header, TestContext};

#[rstest]
#[case(json!({"name": "Amoxicillin", "frequency": "1-0-1", "duration": "5"}), "encounter_id is required")]
#[case(json!({"encounter_id": 9, "frequency": "1-0-1", "duration": "5"}), "name is required")]
#[case(json!({"encounter_id": 9, "name": "Amoxicillin", "frequency": "  ", "duration": "5"}), "frequency is required")]
#[case(json!({"encounter_id": 9, "name": "Amoxicillin", "frequency": "1-0-1"}), "duration is required")]
#[tokio::test]
async fn test_save_prescription_requires_fields(#[case] body: Value, #[case] message: &str) {
    let server = TestContext::new().server();
    let (name, value) = role_header("doctor");

    let response = server
        .post("/api/prescriptions")
        .add_header(name, value)
        .json(&body)
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>(),
        json!({"status": false, "message": message})
    );
}

#[tokio::test]
async fn test_patient_cannot_add_prescription() {
    let server = TestContext::new().server();
    let (name, value) = role_header("patient");

    let response = server
        .post("/api/prescriptions")
        .add_header(name, value)
        .json(&json!({"encounter_id": 9, "name": "A", "frequency": "B", "duration": "C"}))
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_patient_cannot_open_prescription_for_editing() {
    let server = TestContext::new().server();
    let (name, value) = role_header("patient");

    let response = server
        .get("/api/prescriptions/4")
        .add_header(name, value)
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_list_prescriptions_without_encounter_is_not_found() {
    let server = TestContext::new().server();
    let (name, value) = role_header("patient");

    let response = server
        .get("/api/prescriptions")
        .add_header(name, value)
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<Value>(),
        json!({"status": false, "message": "Encounter not found"})
    );
}

#[tokio::test]
async fn test_mail_prescription_needs_encounter() {
    let server = TestContext::new().server();
    let (name, value) = role_header("receptionist");

    let response = server
        .post("/api/prescriptions/mail")
        .add_header(name, value)
        .json(&json!({}))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_prescription_without_role_is_forbidden() {
    let server = TestContext::new().server();

    let response = server.delete("/api/prescriptions/4").await;

    response.assert_status(StatusCode::FORBIDDEN);
}
