//! Outbound port for the hospital service.

use async_trait::async_trait;

use crate::error::ServiceError;
use crate::types::{Doctor, DoctorId, NewDoctor};

/// The remote service owning authoritative doctor and token state.
///
/// Every method is exactly one request; adapters never retry.
#[async_trait]
pub trait HospitalService: Send + Sync {
    /// `GET /api/hospital/doctors`
    async fn list_doctors(&self) -> Result<Vec<Doctor>, ServiceError>;

    /// `POST /api/hospital/doctors`
    async fn create_doctor(&self, doctor: &NewDoctor) -> Result<Doctor, ServiceError>;

    /// `DELETE /api/hospital/doctors/{id}`
    async fn delete_doctor(&self, id: &DoctorId) -> Result<(), ServiceError>;

    /// `POST /api/token-management/increment-token`, returning the new token.
    async fn increment_token(&self, doctor_id: &DoctorId) -> Result<u64, ServiceError>;
}
