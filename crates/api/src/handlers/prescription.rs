//! # Prescription Handlers
//!
//! Prescriptions hang off a patient encounter; the patient is always taken
//! from the encounter rather than from the request.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use clinicdesk_core::{
    errors::ClinicError,
    models::{
        prescription::{
            render_prescription_table, MailPrescriptionRequest, Prescription,
            PrescriptionListQuery, SavePrescriptionRequest,
        },
        response::{ApiResponse, StatusResponse},
    },
    notify::{NotificationPayload, TEMPLATE_BOOK_PRESCRIPTION},
    permissions::Capability,
};
use clinicdesk_db::repositories::{self, prescription::PrescriptionFields};
use std::sync::Arc;
use tracing::info;

use crate::{
    middleware::{auth::CurrentUser, error_handling::AppError},
    ApiState,
};

#[axum::debug_handler]
pub async fn list_prescriptions(
    State(state): State<Arc<ApiState>>,
    user: CurrentUser,
    Query(query): Query<PrescriptionListQuery>,
) -> Result<Json<ApiResponse<Vec<Prescription>>>, AppError> {
    user.require(Capability::PrescriptionList)?;

    let encounter_id = query
        .encounter_id
        .ok_or_else(|| ClinicError::NotFound("Encounter not found".to_string()))?;

    repositories::encounter::get_encounter_by_id(&state.db_pool, encounter_id)
        .await
        .map_err(ClinicError::Database)?
        .ok_or_else(|| ClinicError::NotFound("Encounter not found".to_string()))?;

    let prescriptions = repositories::prescription::list_by_encounter(&state.db_pool, encounter_id)
        .await
        .map_err(ClinicError::Database)?;
    if prescriptions.is_empty() {
        return Err(AppError(ClinicError::NotFound(
            "No prescription found".to_string(),
        )));
    }

    let total = prescriptions.len() as i64;
    let prescriptions = prescriptions.into_iter().map(Prescription::from).collect();

    Ok(Json(
        ApiResponse::ok("Prescription list", prescriptions).with_total(total),
    ))
}

/// Creates a prescription, or updates it when `id` is set.
#[axum::debug_handler]
pub async fn save_prescription(
    State(state): State<Arc<ApiState>>,
    user: CurrentUser,
    Json(payload): Json<SavePrescriptionRequest>,
) -> Result<Json<ApiResponse<Prescription>>, AppError> {
    user.require(Capability::PrescriptionAdd)?;

    if let Some(field) = payload.missing_field() {
        return Err(AppError(ClinicError::Validation(format!(
            "{} is required",
            field
        ))));
    }

    let encounter_id = payload.encounter_id.unwrap_or_default();
    let encounter = repositories::encounter::get_encounter_by_id(&state.db_pool, encounter_id)
        .await
        .map_err(ClinicError::Database)?
        .ok_or_else(|| ClinicError::NotFound("No encounter found".to_string()))?;

    let fields = PrescriptionFields {
        encounter_id: encounter.id,
        patient_id: encounter.patient_id,
        name: payload.name.as_deref().unwrap_or_default().trim(),
        frequency: payload.frequency.as_deref().unwrap_or_default().trim(),
        duration: payload.duration.as_deref().unwrap_or_default().trim(),
        instruction: payload.instruction.as_deref(),
    };

    let (row, message) = match payload.id {
        Some(id) => {
            let row = repositories::prescription::update_prescription(&state.db_pool, id, fields)
                .await
                .map_err(ClinicError::Database)?
                .ok_or_else(|| ClinicError::NotFound("Data not found".to_string()))?;
            (row, "Prescription updated successfully")
        }
        None => {
            let added_by = user.user_id()?;
            let row =
                repositories::prescription::create_prescription(&state.db_pool, fields, added_by)
                    .await
                    .map_err(ClinicError::Database)?;
            (row, "Prescription saved successfully")
        }
    };

    Ok(Json(ApiResponse::ok(message, Prescription::from(row))))
}

#[axum::debug_handler]
pub async fn get_prescription(
    State(state): State<Arc<ApiState>>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Prescription>>, AppError> {
    user.require(Capability::PrescriptionEdit)?;
    user.require(Capability::PrescriptionView)?;

    let row = repositories::prescription::get_prescription_by_id(&state.db_pool, id)
        .await
        .map_err(ClinicError::Database)?
        .ok_or_else(|| ClinicError::NotFound("Data not found".to_string()))?;

    Ok(Json(ApiResponse::ok("Prescription", Prescription::from(row))))
}

#[axum::debug_handler]
pub async fn delete_prescription(
    State(state): State<Arc<ApiState>>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<StatusResponse>, AppError> {
    user.require(Capability::PrescriptionDelete)?;

    let deleted = repositories::prescription::delete_prescription(&state.db_pool, id)
        .await
        .map_err(ClinicError::Database)?;
    if !deleted {
        return Err(AppError(ClinicError::NotFound("Data not found".to_string())));
    }

    Ok(Json(StatusResponse::ok("Prescription deleted successfully")))
}

/// Mails every prescription of an encounter to its patient.
#[axum::debug_handler]
pub async fn mail_prescription(
    State(state): State<Arc<ApiState>>,
    user: CurrentUser,
    Json(payload): Json<MailPrescriptionRequest>,
) -> Result<Json<StatusResponse>, AppError> {
    user.require(Capability::PrescriptionView)?;

    let encounter_id = payload
        .encounter_id
        .ok_or_else(|| ClinicError::Validation("encounter_id is required".to_string()))?;

    let contacts = repositories::encounter::get_encounter_contacts(&state.db_pool, encounter_id)
        .await
        .map_err(ClinicError::Database)?
        .ok_or_else(|| ClinicError::NotFound("Encounter not found".to_string()))?;

    let prescriptions = repositories::prescription::list_by_encounter(&state.db_pool, encounter_id)
        .await
        .map_err(ClinicError::Database)?
        .into_iter()
        .map(Prescription::from)
        .collect::<Vec<_>>();
    if prescriptions.is_empty() {
        return Err(AppError(ClinicError::NotFound(
            "No prescription found".to_string(),
        )));
    }

    let notice = NotificationPayload::new(
        contacts.patient_email.unwrap_or_default(),
        TEMPLATE_BOOK_PRESCRIPTION,
    )
    .with("clinic_name", contacts.clinic_name.unwrap_or_default())
    .with("doctor_name", contacts.doctor_name.unwrap_or_default())
    .with("prescription", render_prescription_table(&prescriptions));

    let sent = state
        .notifier
        .send(notice)
        .await
        .map_err(ClinicError::Database)?;

    info!(encounter_id, sent, "Prescription mail requested");

    if sent {
        Ok(Json(StatusResponse::ok("Prescription sent successfully.")))
    } else {
        Ok(Json(StatusResponse {
            status: false,
            message: "Failed to send prescription.".to_string(),
        }))
    }
}
