use axum::http::StatusCode;
use clinicdesk_core::models::{
    appointment::Appointment,
    holiday::{ClinicHoliday, ModuleType},
    session::ClinicSession,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::test_utils::{monday, t, TestContext, CLINIC, DOCTOR};

fn morning_session() -> ClinicSession {
    ClinicSession {
        id: 1,
        clinic_id: CLINIC,
        doctor_id: DOCTOR,
        day: "mon".to_string(),
        start_time: t(9, 0),
        end_time: t(10, 0),
        time_slot: 20,
        parent_id: None,
    }
}

fn booked_at_0920() -> Appointment {
    Appointment {
        id: 40,
        doctor_id: DOCTOR,
        clinic_id: CLINIC,
        patient_id: 11,
        appointment_start_date: monday(),
        appointment_start_time: t(9, 20),
        status: 1,
    }
}

fn ctx_with_morning_session() -> TestContext {
    let mut ctx = TestContext::new();
    ctx.store
        .expect_sessions_for_day()
        .returning(|_, _, _| Ok(vec![morning_session()]));
    ctx.store
        .expect_holidays_covering()
        .returning(|_| Ok(Vec::new()));
    ctx.store
        .expect_active_appointments_on()
        .returning(|_| Ok(vec![booked_at_0920()]));
    ctx
}

#[test_log::test(tokio::test)]
async fn test_slots_mark_booked_time_unavailable() {
    let server = ctx_with_morning_session().server();

    let response = server
        .get("/api/availability/slots")
        .add_query_param("date", "2024-03-04")
        .add_query_param("doctor_id", DOCTOR)
        .add_query_param("clinic_id", CLINIC)
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!([[
            {"time": "09:00 AM", "available": true},
            {"time": "09:20 AM", "available": false},
            {"time": "09:40 AM", "available": true}
        ]])
    );
}

#[tokio::test]
async fn test_slots_only_available_drops_booked_time() {
    let server = ctx_with_morning_session().server();

    let response = server
        .get("/api/availability/slots")
        .add_query_param("date", "2024-03-04")
        .add_query_param("doctor_id", DOCTOR)
        .add_query_param("clinic_id", CLINIC)
        .add_query_param("only_available", true)
        .await;

    assert_eq!(
        response.json::<Value>(),
        json!([[
            {"time": "09:00 AM", "available": true},
            {"time": "09:40 AM", "available": true}
        ]])
    );
}

#[tokio::test]
async fn test_slots_edited_appointment_frees_its_own_time() {
    let server = ctx_with_morning_session().server();

    let response = server
        .get("/api/availability/slots")
        .add_query_param("date", "2024-03-04")
        .add_query_param("doctor_id", DOCTOR)
        .add_query_param("clinic_id", CLINIC)
        .add_query_param("appointment_id", 40)
        .await;

    let groups = response.json::<Value>();
    assert_eq!(groups[0][1], json!({"time": "09:20 AM", "available": true}));
}

#[tokio::test]
async fn test_slots_missing_parameter_is_empty() {
    let mut ctx = TestContext::new();
    ctx.store.expect_sessions_for_day().never();
    let server = ctx.server();

    let response = server
        .get("/api/availability/slots")
        .add_query_param("date", "2024-03-04")
        .add_query_param("doctor_id", DOCTOR)
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!([]));
}

#[tokio::test]
async fn test_slots_clinic_holiday_closes_day() {
    let mut ctx = TestContext::new();
    ctx.store
        .expect_sessions_for_day()
        .returning(|_, _, _| Ok(vec![morning_session()]));
    ctx.store.expect_holidays_covering().returning(|date| {
        Ok(vec![ClinicHoliday {
            id: 5,
            module_type: ModuleType::Clinic,
            module_id: CLINIC,
            start_date: date,
            end_date: date,
            description: None,
            status: 1,
        }])
    });
    ctx.store.expect_active_appointments_on().never();
    let server = ctx.server();

    let response = server
        .get("/api/availability/slots")
        .add_query_param("date", "2024-03-04")
        .add_query_param("doctor_id", DOCTOR)
        .add_query_param("clinic_id", CLINIC)
        .await;

    assert_eq!(response.json::<Value>(), json!([]));
}

#[tokio::test]
async fn test_slots_store_failure_is_internal_error() {
    let mut ctx = TestContext::new();
    ctx.store
        .expect_sessions_for_day()
        .returning(|_, _, _| Err(eyre::eyre!("connection reset")));
    let server = ctx.server();

    let response = server
        .get("/api/availability/slots")
        .add_query_param("date", "2024-03-04")
        .add_query_param("doctor_id", DOCTOR)
        .add_query_param("clinic_id", CLINIC)
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>(),
        json!({"status": false, "message": "Internal server error"})
    );
}

#[tokio::test]
async fn test_slots_malformed_date_is_rejected() {
    let server = TestContext::new().server();

    let response = server
        .get("/api/availability/slots")
        .add_query_param("date", "04/03/2024")
        .add_query_param("doctor_id", DOCTOR)
        .add_query_param("clinic_id", CLINIC)
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_health_check() {
    let server = TestContext::new().server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!({"status": "ok"}));
}
