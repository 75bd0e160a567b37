//! # Permission Checks
//!
//! The fronting host authenticates users and forwards who is acting in two
//! headers. [`CurrentUser`] reads them and handlers gate every action on the
//! role's capabilities.

use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap},
};
use clinicdesk_core::{
    errors::ClinicError,
    permissions::{any_of, Capability, Role},
};
use tracing::debug;

use crate::middleware::error_handling::AppError;

pub const USER_ID_HEADER: &str = "x-user-id";
pub const USER_ROLE_HEADER: &str = "x-user-role";

/// The user a request acts on behalf of.
///
/// A missing or unrecognised role is kept as `None` and holds no capability.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: Option<i64>,
    pub role: Option<Role>,
}

impl CurrentUser {
    pub fn from_headers(headers: &HeaderMap) -> Result<Self, ClinicError> {
        let id = match headers.get(USER_ID_HEADER) {
            Some(value) => {
                let raw = value
                    .to_str()
                    .map_err(|_| ClinicError::Authentication("Invalid user id header".to_string()))?;
                let id = raw
                    .trim()
                    .parse::<i64>()
                    .map_err(|_| ClinicError::Authentication(format!("Invalid user id: {}", raw)))?;
                Some(id)
            }
            None => None,
        };

        let role = headers
            .get(USER_ROLE_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|raw| match raw.parse::<Role>() {
                Ok(role) => Some(role),
                Err(err) => {
                    debug!("Ignoring role header: {}", err);
                    None
                }
            });

        Ok(Self { id, role })
    }

    /// Fails with an authorization error unless the role holds `capability`.
    pub fn require(&self, capability: Capability) -> Result<(), AppError> {
        self.require_any(&[capability])
    }

    /// Fails with an authorization error unless the role holds at least one
    /// of `capabilities`.
    pub fn require_any(&self, capabilities: &[Capability]) -> Result<(), AppError> {
        if any_of(self.role, capabilities) {
            Ok(())
        } else {
            Err(AppError(ClinicError::Authorization(
                "You don't have permission to access".to_string(),
            )))
        }
    }

    pub fn user_id(&self) -> Result<i64, AppError> {
        self.id
            .ok_or_else(|| AppError(ClinicError::Authentication("Missing user id".to_string())))
    }

    pub fn is_doctor(&self) -> bool {
        self.role == Some(Role::Doctor)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_headers(&parts.headers)?)
    }
}
