//! Wire types exchanged with the hospital service.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque doctor identifier assigned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DoctorId(String);

impl DoctorId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DoctorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DoctorId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A doctor record as returned by `GET /api/hospital/doctors`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    /// Server-assigned id. Document stores send it as `_id`.
    #[serde(alias = "_id")]
    pub id: DoctorId,
    pub name: String,
    pub specialization: String,
    /// Server-controlled; never mutated by the console.
    #[serde(default)]
    pub availability: bool,
}

impl Doctor {
    pub fn availability_label(&self) -> &'static str {
        if self.availability {
            "Available"
        } else {
            "Unavailable"
        }
    }

    /// Directory card label, e.g. `Dr. Lee — Cardiology — Available`.
    pub fn card_label(&self) -> String {
        format!(
            "Dr. {} — {} — {}",
            self.name,
            self.specialization,
            self.availability_label()
        )
    }
}

/// Payload for `POST /api/hospital/doctors`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDoctor {
    pub name: String,
    pub specialization: String,
}

impl NewDoctor {
    pub fn new(name: impl Into<String>, specialization: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            specialization: specialization.into(),
        }
    }
}

/// Payload for `POST /api/token-management/increment-token`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncrementTokenRequest {
    #[serde(rename = "doctorId")]
    pub doctor_id: DoctorId,
}

/// Response of the increment call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: u64,
}

/// Error body convention: an optional human-readable `message`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
