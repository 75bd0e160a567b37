use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prescription {
    pub id: i64,
    pub encounter_id: i64,
    pub patient_id: i64,
    pub name: String,
    pub frequency: String,
    pub duration: String,
    pub instruction: Option<String>,
    pub added_by: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientEncounter {
    pub id: i64,
    pub patient_id: i64,
    pub doctor_id: i64,
    pub clinic_id: i64,
    pub encounter_date: NaiveDate,
}

/// Body of the prescription save endpoint.
///
/// Every field is optional at the wire level so that missing values turn
/// into a validation message instead of a deserialization rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SavePrescriptionRequest {
    pub id: Option<i64>,
    pub encounter_id: Option<i64>,
    pub name: Option<String>,
    pub frequency: Option<String>,
    pub duration: Option<String>,
    pub instruction: Option<String>,
}

impl SavePrescriptionRequest {
    /// First missing required field, in declaration order.
    pub fn missing_field(&self) -> Option<&'static str> {
        fn blank(value: &Option<String>) -> bool {
            value.as_deref().map_or(true, |v| v.trim().is_empty())
        }

        if self.encounter_id.is_none() {
            Some("encounter_id")
        } else if blank(&self.name) {
            Some("name")
        } else if blank(&self.frequency) {
            Some("frequency")
        } else if blank(&self.duration) {
            Some("duration")
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrescriptionListQuery {
    pub encounter_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailPrescriptionRequest {
    pub encounter_id: Option<i64>,
}

/// Plain-text table of prescriptions used as the `prescription` substitution
/// of the prescription mail.
pub fn render_prescription_table(prescriptions: &[Prescription]) -> String {
    let mut out = String::from("NAME | FREQUENCY | DAYS");
    for p in prescriptions {
        out.push('\n');
        out.push_str(&format!("{} | {} | {}", p.name, p.frequency, p.duration));
    }
    out
}
