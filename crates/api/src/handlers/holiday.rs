//! # Holiday Schedule Handlers
//!
//! Doctors and clinics take leave through holiday rows. Saving a holiday
//! rejects ranges that run into another holiday of the same doctor or
//! clinic, then cancels the appointments booked inside the new range and
//! tells the affected patients.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use clinicdesk_core::{
    errors::ClinicError,
    holiday::{already_scheduled_message, saved_message, validate_range},
    models::{
        appointment::CancelledAppointment,
        holiday::{ClinicHoliday, HolidayListItem, HolidayListQuery, SaveHolidayRequest},
        response::{ApiResponse, StatusResponse},
    },
    notify::notify_cancelled,
    permissions::Capability,
};
use clinicdesk_db::repositories;
use std::sync::Arc;
use tracing::info;

use crate::{
    middleware::{auth::CurrentUser, error_handling::AppError},
    ApiState,
};

const DEFAULT_PAGE_SIZE: i64 = 20;
const MAX_PAGE_SIZE: i64 = 100;

/// Newest-first holiday listing. Doctors only see their own leave.
#[axum::debug_handler]
pub async fn list_holidays(
    State(state): State<Arc<ApiState>>,
    user: CurrentUser,
    Query(query): Query<HolidayListQuery>,
) -> Result<Json<ApiResponse<Vec<HolidayListItem>>>, AppError> {
    user.require_any(&[Capability::ClinicSchedule, Capability::StaticDataList])?;

    let doctor_id = if user.is_doctor() {
        Some(user.user_id()?)
    } else {
        None
    };
    let limit = query
        .limit
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .clamp(1, MAX_PAGE_SIZE);
    let offset = query.offset.unwrap_or(0).max(0);

    let rows = repositories::holiday::list_holidays(&state.db_pool, doctor_id, limit, offset)
        .await
        .map_err(ClinicError::Database)?;
    let total = repositories::holiday::count_holidays(&state.db_pool, doctor_id)
        .await
        .map_err(ClinicError::Database)?;

    let items = rows
        .into_iter()
        .map(HolidayListItem::try_from)
        .collect::<eyre::Result<Vec<_>>>()
        .map_err(ClinicError::Database)?;

    Ok(Json(
        ApiResponse::ok("Clinic schedule list", items).with_total(total),
    ))
}

/// Creates a holiday, or updates it when `id` is set.
#[axum::debug_handler]
pub async fn save_holiday(
    State(state): State<Arc<ApiState>>,
    user: CurrentUser,
    Json(payload): Json<SaveHolidayRequest>,
) -> Result<Json<ApiResponse<ClinicHoliday>>, AppError> {
    user.require(Capability::ClinicSchedule)?;
    validate_range(payload.start_date, payload.end_date)?;

    let mut tx = state.db_pool.begin().await?;

    let overlapping = repositories::holiday::has_overlap(
        &mut *tx,
        payload.module_type,
        payload.module_id,
        payload.start_date,
        payload.end_date,
        payload.id,
    )
    .await
    .map_err(ClinicError::Database)?;

    if overlapping {
        return Err(AppError(ClinicError::Conflict(already_scheduled_message(
            payload.module_type,
        ))));
    }

    let description = payload.description.as_deref();
    let row = match payload.id {
        Some(id) => repositories::holiday::update_holiday(
            &mut *tx,
            id,
            payload.module_type,
            payload.module_id,
            payload.start_date,
            payload.end_date,
            description,
        )
        .await
        .map_err(ClinicError::Database)?
        .ok_or_else(|| ClinicError::NotFound("Data not found".to_string()))?,
        None => repositories::holiday::create_holiday(
            &mut *tx,
            payload.module_type,
            payload.module_id,
            payload.start_date,
            payload.end_date,
            description,
        )
        .await
        .map_err(ClinicError::Database)?,
    };

    let cancelled = repositories::appointment::cancel_in_range(
        &mut *tx,
        payload.module_type,
        payload.module_id,
        payload.start_date,
        payload.end_date,
    )
    .await
    .map_err(ClinicError::Database)?
    .into_iter()
    .map(CancelledAppointment::from)
    .collect::<Vec<_>>();

    tx.commit().await?;

    let notified = notify_cancelled(state.notifier.as_ref(), &cancelled).await;

    info!(
        holiday_id = row.id,
        module_type = %payload.module_type,
        module_id = payload.module_id,
        cancelled = cancelled.len(),
        notified,
        "Holiday saved"
    );

    let holiday = ClinicHoliday::try_from(row).map_err(ClinicError::Database)?;
    Ok(Json(ApiResponse::ok(
        saved_message(payload.module_type, payload.id.is_some()),
        holiday,
    )))
}

#[axum::debug_handler]
pub async fn get_holiday(
    State(state): State<Arc<ApiState>>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<ClinicHoliday>>, AppError> {
    user.require(Capability::ClinicSchedule)?;

    let row = repositories::holiday::get_holiday_by_id(&state.db_pool, id)
        .await
        .map_err(ClinicError::Database)?
        .ok_or_else(|| ClinicError::NotFound("Data not found".to_string()))?;
    let holiday = ClinicHoliday::try_from(row).map_err(ClinicError::Database)?;

    Ok(Json(ApiResponse::ok("Clinic schedule", holiday)))
}

#[axum::debug_handler]
pub async fn delete_holiday(
    State(state): State<Arc<ApiState>>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<StatusResponse>, AppError> {
    user.require(Capability::ClinicSchedule)?;

    let deleted = repositories::holiday::delete_holiday(&state.db_pool, id)
        .await
        .map_err(ClinicError::Database)?;
    if !deleted {
        return Err(AppError(ClinicError::NotFound("Data not found".to_string())));
    }

    Ok(Json(StatusResponse::ok("Clinic schedule deleted successfully.")))
}
