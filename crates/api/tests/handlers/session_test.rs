use axum::http::StatusCode;
use chrono::Weekday;
use clinicdesk_api::handlers::session::validate_session_request;
use clinicdesk_core::{
    errors::ClinicError,
    models::session::{CreateSessionRequest, ShiftRequest},
};
use rstest::rstest;
use serde_json::{json, Value};

use crate::test_utils::{role_header, t, TestContext, CLINIC, DOCTOR};

fn request(time_slot: i32, second_shift: Option<ShiftRequest>) -> CreateSessionRequest {
    CreateSessionRequest {
        clinic_id: CLINIC,
        doctor_id: DOCTOR,
        days: vec![Weekday::Mon, Weekday::Wed],
        time_slot,
        first_shift: ShiftRequest {
            start_time: t(9, 0),
            end_time: t(13, 0),
        },
        second_shift,
    }
}

#[test]
fn test_split_shift_request_is_valid() {
    let req = request(
        15,
        Some(ShiftRequest {
            start_time: t(14, 0),
            end_time: t(18, 0),
        }),
    );

    assert!(validate_session_request(&req).is_ok());
}

#[rstest]
#[case(0, None)]
#[case(-10, None)]
#[case(15, Some((t(17, 0), t(16, 0))))]
#[case(15, Some((t(12, 0), t(16, 0))))]
fn test_invalid_session_requests(
    #[case] time_slot: i32,
    #[case] second: Option<(chrono::NaiveTime, chrono::NaiveTime)>,
) {
    let req = request(
        time_slot,
        second.map(|(start_time, end_time)| ShiftRequest {
            start_time,
            end_time,
        }),
    );

    assert!(matches!(
        validate_session_request(&req),
        Err(ClinicError::Validation(_))
    ));
}

#[test]
fn test_session_request_without_days_is_invalid() {
    let mut req = request(15, None);
    req.days.clear();

    assert!(matches!(
        validate_session_request(&req),
        Err(ClinicError::Validation(_))
    ));
}

#[tokio::test]
async fn test_create_sessions_as_patient_is_forbidden() {
    let server = TestContext::new().server();
    let (name, value) = role_header("patient");

    let response = server
        .post("/api/clinic-sessions")
        .add_header(name, value)
        .json(&json!({
            "clinic_id": CLINIC,
            "doctor_id": DOCTOR,
            "days": ["mon"],
            "time_slot": 15,
            "first_shift": {"start_time": "09:00:00", "end_time": "12:00:00"}
        }))
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_create_sessions_rejects_zero_slot() {
    let server = TestContext::new().server();
    let (name, value) = role_header("doctor");

    let response = server
        .post("/api/clinic-sessions")
        .add_header(name, value)
        .json(&json!({
            "clinic_id": CLINIC,
            "doctor_id": DOCTOR,
            "days": ["monday"],
            "time_slot": 0,
            "first_shift": {"start_time": "09:00:00", "end_time": "12:00:00"}
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["message"],
        "Time slot must be a positive number of minutes"
    );
}

#[rstest]
#[case("/api/clinics/7/sessions")]
#[case("/api/clinics/12/sessions")]
#[tokio::test]
async fn test_list_clinic_sessions_as_patient_is_forbidden(#[case] path: &str) {
    let server = TestContext::new().server();
    let (name, value) = role_header("patient");

    let response = server.get(path).add_header(name, value).await;

    response.assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_delete_session_without_role_is_forbidden() {
    let server = TestContext::new().server();

    let response = server.delete("/api/clinic-sessions/5").await;

    response.assert_status(StatusCode::FORBIDDEN);
    assert_eq!(
        response.json::<Value>(),
        json!({"status": false, "message": "You don't have permission to access"})
    );
}
