use axum::{
    extract::{Path, State},
    Json,
};
use clinicdesk_core::{
    errors::ClinicError,
    models::{
        response::{ApiResponse, StatusResponse},
        session::{
            fold_split_shifts, weekday_names, ClinicSession, CreateSessionRequest, SessionSchedule,
            ShiftRequest,
        },
    },
    permissions::Capability,
};
use std::sync::Arc;
use tracing::info;

use crate::{
    middleware::{auth::CurrentUser, error_handling::AppError},
    ApiState,
};

fn validate_shift(label: &str, shift: &ShiftRequest) -> Result<(), ClinicError> {
    if shift.start_time >= shift.end_time {
        return Err(ClinicError::Validation(format!(
            "{} shift must start before it ends",
            label
        )));
    }
    Ok(())
}

pub fn validate_session_request(payload: &CreateSessionRequest) -> Result<(), ClinicError> {
    if payload.time_slot <= 0 {
        return Err(ClinicError::Validation(
            "Time slot must be a positive number of minutes".to_string(),
        ));
    }
    if payload.days.is_empty() {
        return Err(ClinicError::Validation(
            "At least one day must be selected".to_string(),
        ));
    }

    validate_shift("First", &payload.first_shift)?;
    if let Some(second) = &payload.second_shift {
        validate_shift("Second", second)?;
        if second.start_time < payload.first_shift.end_time {
            return Err(ClinicError::Validation(
                "Second shift must start after the first shift ends".to_string(),
            ));
        }
    }

    Ok(())
}

/// Creates the sessions of a doctor at a clinic, one row per day plus a
/// linked child row when a second shift is given.
#[axum::debug_handler]
pub async fn create_sessions(
    State(state): State<Arc<ApiState>>,
    user: CurrentUser,
    Json(payload): Json<CreateSessionRequest>,
) -> Result<Json<ApiResponse<Vec<ClinicSession>>>, AppError> {
    user.require(Capability::DoctorSessionAdd)?;
    validate_session_request(&payload)?;

    let mut tx = state.db_pool.begin().await?;
    let mut created = Vec::new();

    for day in &payload.days {
        let (day_name, _) = weekday_names(*day);

        let parent = clinicdesk_db::repositories::session::create_session(
            &mut *tx,
            payload.clinic_id,
            payload.doctor_id,
            day_name,
            payload.first_shift.start_time,
            payload.first_shift.end_time,
            payload.time_slot,
            None,
        )
        .await
        .map_err(ClinicError::Database)?;
        let parent_id = parent.id;
        created.push(ClinicSession::from(parent));

        if let Some(second) = &payload.second_shift {
            let child = clinicdesk_db::repositories::session::create_session(
                &mut *tx,
                payload.clinic_id,
                payload.doctor_id,
                day_name,
                second.start_time,
                second.end_time,
                payload.time_slot,
                Some(parent_id),
            )
            .await
            .map_err(ClinicError::Database)?;
            created.push(ClinicSession::from(child));
        }
    }

    tx.commit().await?;

    info!(
        doctor_id = payload.doctor_id,
        clinic_id = payload.clinic_id,
        sessions = created.len(),
        "Doctor sessions created"
    );

    Ok(Json(ApiResponse::ok(
        "Doctor session saved successfully.",
        created,
    )))
}

/// Sessions of a clinic with split shifts folded into their parent.
#[axum::debug_handler]
pub async fn list_clinic_sessions(
    State(state): State<Arc<ApiState>>,
    user: CurrentUser,
    Path(clinic_id): Path<i64>,
) -> Result<Json<ApiResponse<Vec<SessionSchedule>>>, AppError> {
    user.require(Capability::DoctorSessionAdd)?;

    let sessions = clinicdesk_db::repositories::session::list_for_clinic(&state.db_pool, clinic_id)
        .await
        .map_err(ClinicError::Database)?
        .into_iter()
        .map(ClinicSession::from)
        .collect::<Vec<_>>();
    let schedules = fold_split_shifts(&sessions);
    let total = schedules.len() as i64;

    Ok(Json(
        ApiResponse::ok("Clinic session list", schedules).with_total(total),
    ))
}

#[axum::debug_handler]
pub async fn delete_session(
    State(state): State<Arc<ApiState>>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<StatusResponse>, AppError> {
    user.require(Capability::DoctorSessionAdd)?;

    let deleted = clinicdesk_db::repositories::session::delete_session(&state.db_pool, id)
        .await
        .map_err(ClinicError::Database)?;
    if !deleted {
        return Err(AppError(ClinicError::NotFound("Data not found".to_string())));
    }

    info!(session_id = id, "Doctor session deleted");

    Ok(Json(StatusResponse::ok("Doctor session deleted successfully.")))
}
