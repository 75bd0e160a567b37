//! # Availability Handlers
//!
//! The slot endpoint answers which times of a day a doctor can still be
//! booked at a clinic. It is public: the booking widget calls it before a
//! patient has signed in. The generation itself lives in
//! [`clinicdesk_core::availability`].

use axum::{
    extract::{Path, Query, State},
    Json,
};
use clinicdesk_core::{
    availability::{compute_slots, SlotGroups, SlotRequest},
    errors::ClinicError,
    models::{
        response::ApiResponse,
        session::{group_by_day, ClinicSession, WeeklyAvailability},
        slot::SlotQuery,
    },
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

use crate::{middleware::error_handling::AppError, ApiState};

/// Slot groups for a doctor, clinic and date.
///
/// # Endpoint
///
/// ```text
/// GET /api/availability/slots?date=2024-01-15&doctor_id=1&clinic_id=2
/// ```
///
/// A request lacking `date`, `doctor_id` or `clinic_id` answers `[]`.
#[axum::debug_handler]
pub async fn get_slots(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<SlotQuery>,
) -> Result<Json<SlotGroups>, AppError> {
    let Some(request) = SlotRequest::from_query(&query) else {
        debug!("Slot request without date, doctor or clinic");
        return Ok(Json(Vec::new()));
    };

    let slots = compute_slots(state.store.as_ref(), state.clock.as_ref(), &request).await?;

    Ok(Json(slots))
}

#[derive(Debug, Deserialize)]
pub struct WeeklyAvailabilityQuery {
    pub clinic_id: Option<i64>,
}

/// Session shifts of a doctor grouped by weekday.
#[axum::debug_handler]
pub async fn weekly_availability(
    State(state): State<Arc<ApiState>>,
    Path(doctor_id): Path<i64>,
    Query(query): Query<WeeklyAvailabilityQuery>,
) -> Result<Json<ApiResponse<WeeklyAvailability>>, AppError> {
    let sessions = clinicdesk_db::repositories::session::list_for_doctor(
        &state.db_pool,
        doctor_id,
        query.clinic_id,
    )
    .await
    .map_err(ClinicError::Database)?
    .into_iter()
    .map(ClinicSession::from)
    .collect::<Vec<_>>();

    Ok(Json(ApiResponse::ok(
        "Doctor weekly availability",
        group_by_day(&sessions),
    )))
}
