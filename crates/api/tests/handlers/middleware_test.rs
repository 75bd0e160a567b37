use axum::{
    body::to_bytes,
    http::{HeaderMap, HeaderValue, StatusCode},
};
use clinicdesk_api::middleware::{
    auth::{CurrentUser, USER_ID_HEADER, USER_ROLE_HEADER},
    error_handling::{map_error, AppError},
};
use clinicdesk_core::{
    errors::ClinicError,
    permissions::{Capability, Role},
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{json, Value};
use tokio_test::{assert_err, assert_ok};

#[rstest]
#[case(ClinicError::NotFound("Data not found".to_string()), StatusCode::NOT_FOUND)]
#[case(ClinicError::Validation("Invalid input".to_string()), StatusCode::BAD_REQUEST)]
#[case(ClinicError::Conflict("Clinic already has holiday scheduled.".to_string()), StatusCode::CONFLICT)]
#[case(ClinicError::Authentication("Missing user id".to_string()), StatusCode::UNAUTHORIZED)]
#[case(ClinicError::Authorization("Not authorized".to_string()), StatusCode::FORBIDDEN)]
#[case(ClinicError::Database(eyre::eyre!("Database error")), StatusCode::INTERNAL_SERVER_ERROR)]
#[tokio::test]
async fn test_error_status_mapping(#[case] error: ClinicError, #[case] status: StatusCode) {
    let response = map_error(error);

    assert_eq!(response.status(), status);
}

#[tokio::test]
async fn test_error_handling_internal() {
    let error = ClinicError::Internal(Box::new(std::io::Error::new(
        std::io::ErrorKind::Other,
        "Internal error",
    )));

    let response = map_error(error);

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_conflict_body_carries_plain_message() {
    let response = map_error(ClinicError::Conflict(
        "Doctor already has holiday scheduled.".to_string(),
    ));

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(
        body,
        json!({"status": false, "message": "Doctor already has holiday scheduled."})
    );
}

#[test]
fn test_database_message_is_not_leaked() {
    let error = AppError(ClinicError::Database(eyre::eyre!("relation \"users\" does not exist")));

    assert_eq!(error.message(), "Internal server error");
}

fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
    let mut map = HeaderMap::new();
    for (name, value) in pairs {
        map.insert(*name, HeaderValue::from_static(value));
    }
    map
}

#[test]
fn test_current_user_from_headers() {
    let user = assert_ok!(CurrentUser::from_headers(&headers(&[
        (USER_ID_HEADER, "12"),
        (USER_ROLE_HEADER, "clinic_admin"),
    ])));

    assert_eq!(user.id, Some(12));
    assert_eq!(user.role, Some(Role::ClinicAdmin));
    assert!(user.require(Capability::StaticDataList).is_ok());
}

#[test]
fn test_current_user_unknown_role_holds_nothing() {
    let user = assert_ok!(CurrentUser::from_headers(&headers(&[(
        USER_ROLE_HEADER,
        "superuser"
    )])));

    assert_eq!(user.role, None);
    let err = user.require(Capability::PrescriptionView).unwrap_err();
    assert_eq!(err.status_code(), StatusCode::FORBIDDEN);
}

#[test]
fn test_current_user_rejects_malformed_id() {
    assert_err!(CurrentUser::from_headers(&headers(&[(USER_ID_HEADER, "twelve")])));
}

#[test]
fn test_doctor_cannot_use_static_data_list() {
    let user = CurrentUser {
        id: Some(3),
        role: Some(Role::Doctor),
    };

    assert!(user.require(Capability::StaticDataList).is_err());
    assert!(user
        .require_any(&[Capability::ClinicSchedule, Capability::StaticDataList])
        .is_ok());
}
