//! Role-based capability checks.
//!
//! The role table is built once on first use and never mutated afterwards.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::errors::ClinicError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Administrator,
    ClinicAdmin,
    Doctor,
    Receptionist,
    Patient,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    ClinicSchedule,
    StaticDataList,
    DoctorSessionAdd,
    PrescriptionList,
    PrescriptionAdd,
    PrescriptionEdit,
    PrescriptionView,
    PrescriptionDelete,
}

impl Capability {
    pub const ALL: [Capability; 8] = [
        Capability::ClinicSchedule,
        Capability::StaticDataList,
        Capability::DoctorSessionAdd,
        Capability::PrescriptionList,
        Capability::PrescriptionAdd,
        Capability::PrescriptionEdit,
        Capability::PrescriptionView,
        Capability::PrescriptionDelete,
    ];
}

const STAFF: &[Capability] = &[
    Capability::ClinicSchedule,
    Capability::DoctorSessionAdd,
    Capability::PrescriptionList,
    Capability::PrescriptionAdd,
    Capability::PrescriptionEdit,
    Capability::PrescriptionView,
    Capability::PrescriptionDelete,
];

const PATIENT: &[Capability] = &[Capability::PrescriptionList, Capability::PrescriptionView];

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Administrator,
        Role::ClinicAdmin,
        Role::Doctor,
        Role::Receptionist,
        Role::Patient,
    ];

    /// Capabilities granted to this role.
    pub fn capabilities(&self) -> &'static [Capability] {
        match self {
            Role::Administrator | Role::ClinicAdmin => &Capability::ALL,
            Role::Doctor | Role::Receptionist => STAFF,
            Role::Patient => PATIENT,
        }
    }

    pub fn can(&self, capability: Capability) -> bool {
        PERMISSIONS.contains(&(*self, capability))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Administrator => "administrator",
            Role::ClinicAdmin => "clinic_admin",
            Role::Doctor => "doctor",
            Role::Receptionist => "receptionist",
            Role::Patient => "patient",
        }
    }
}

static PERMISSIONS: LazyLock<HashSet<(Role, Capability)>> = LazyLock::new(|| {
    Role::ALL
        .iter()
        .flat_map(|role| role.capabilities().iter().map(move |cap| (*role, *cap)))
        .collect()
});

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ClinicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s.trim())
            .ok_or_else(|| ClinicError::Authentication(format!("Unknown role: {}", s)))
    }
}

/// Grants a capability when any one of `capabilities` is held.
pub fn any_of(role: Option<Role>, capabilities: &[Capability]) -> bool {
    role.is_some_and(|role| capabilities.iter().any(|cap| role.can(*cap)))
}
