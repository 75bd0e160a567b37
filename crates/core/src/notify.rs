//! Outbound patient notifications.
//!
//! Real email/SMS transports live outside this service; the bundled
//! [`LogNotifier`] records every delivery through `tracing`.

use std::collections::BTreeMap;

use async_trait::async_trait;
use eyre::Result;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::availability::SLOT_TIME_FORMAT;
use crate::models::appointment::CancelledAppointment;

pub const TEMPLATE_CANCEL_APPOINTMENT: &str = "cancel_appointment";
pub const TEMPLATE_BOOK_PRESCRIPTION: &str = "book_prescription";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPayload {
    pub recipient: String,
    pub template_key: String,
    pub substitutions: BTreeMap<String, String>,
}

impl NotificationPayload {
    pub fn new(recipient: impl Into<String>, template_key: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            template_key: template_key.into(),
            substitutions: BTreeMap::new(),
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.substitutions.insert(key.into(), value.into());
        self
    }

    /// Notice telling a patient that a holiday cancelled their appointment.
    pub fn cancelled_appointment(appointment: &CancelledAppointment) -> Self {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();

        Self::new(text(&appointment.patient_email), TEMPLATE_CANCEL_APPOINTMENT)
            .with("patient_name", text(&appointment.patient_name))
            .with("doctor_name", text(&appointment.doctor_name))
            .with("clinic_name", text(&appointment.clinic_name))
            .with(
                "appointment_date",
                appointment.appointment_start_date.to_string(),
            )
            .with(
                "appointment_time",
                appointment
                    .appointment_start_time
                    .format(SLOT_TIME_FORMAT)
                    .to_string(),
            )
    }
}

#[async_trait]
pub trait Notifier: Send + Sync {
    /// Delivers one notification; `Ok(false)` means it was not sent.
    async fn send(&self, payload: NotificationPayload) -> Result<bool>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn send(&self, payload: NotificationPayload) -> Result<bool> {
        if payload.recipient.trim().is_empty() {
            warn!(template = %payload.template_key, "Skipping notification without recipient");
            return Ok(false);
        }

        info!(
            recipient = %payload.recipient,
            template = %payload.template_key,
            substitutions = ?payload.substitutions,
            "Notification dispatched"
        );
        Ok(true)
    }
}

/// Sends a cancellation notice per appointment and returns how many were
/// delivered. A failed send is logged and the remaining notices still go out.
pub async fn notify_cancelled(
    notifier: &dyn Notifier,
    cancelled: &[CancelledAppointment],
) -> usize {
    let mut delivered = 0;
    for appointment in cancelled {
        match notifier
            .send(NotificationPayload::cancelled_appointment(appointment))
            .await
        {
            Ok(true) => delivered += 1,
            Ok(false) => {}
            Err(err) => warn!(
                appointment_id = appointment.id,
                "Failed to send cancellation notice: {:?}", err
            ),
        }
    }
    delivered
}
