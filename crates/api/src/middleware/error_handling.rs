//! # Error Handling Middleware
//!
//! Maps [`ClinicError`] onto HTTP status codes and the `{"status": false,
//! "message": ...}` body clients expect from every failed call.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use clinicdesk_core::errors::ClinicError;
use serde_json::json;
use tracing::error;

/// Application error wrapper that provides HTTP status code mapping.
///
/// ```
/// use axum::Json;
/// use clinicdesk_api::middleware::error_handling::AppError;
/// use clinicdesk_core::errors::ClinicError;
///
/// async fn handler(found: bool) -> Result<Json<&'static str>, AppError> {
///     if !found {
///         return Err(AppError(ClinicError::NotFound("Data not found".to_string())));
///     }
///     Ok(Json("ok"))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub ClinicError);

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match &self.0 {
            ClinicError::NotFound(_) => StatusCode::NOT_FOUND,
            ClinicError::Validation(_) => StatusCode::BAD_REQUEST,
            ClinicError::Conflict(_) => StatusCode::CONFLICT,
            ClinicError::Authentication(_) => StatusCode::UNAUTHORIZED,
            ClinicError::Authorization(_) => StatusCode::FORBIDDEN,
            ClinicError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ClinicError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message shown to the client. Storage and internal failures are
    /// logged in full but reported generically.
    pub fn message(&self) -> String {
        match &self.0 {
            ClinicError::NotFound(msg)
            | ClinicError::Validation(msg)
            | ClinicError::Conflict(msg)
            | ClinicError::Authentication(msg)
            | ClinicError::Authorization(msg) => msg.clone(),
            ClinicError::Database(_) | ClinicError::Internal(_) => {
                "Internal server error".to_string()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!("Request failed: {:?}", self.0);
        }

        let body = Json(json!({ "status": false, "message": self.message() }));
        (status, body).into_response()
    }
}

impl From<ClinicError> for AppError {
    fn from(err: ClinicError) -> Self {
        AppError(err)
    }
}

impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(ClinicError::Database(err))
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError(ClinicError::Database(err.into()))
    }
}

pub fn map_error(err: ClinicError) -> Response {
    AppError(err).into_response()
}
