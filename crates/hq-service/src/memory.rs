//! In-memory hospital service used by demo mode and tests.
//!
//! Behaves like the REST service: ids are assigned on create, tokens are
//! counted per doctor, and unknown ids are rejected with a 404. Failures and
//! latency can be injected per operation, and every call is counted so tests
//! can assert that no request was issued.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::error::ServiceError;
use crate::port::HospitalService;
use crate::types::{Doctor, DoctorId, NewDoctor};

/// The four service operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    ListDoctors,
    CreateDoctor,
    DeleteDoctor,
    IncrementToken,
}

#[derive(Debug, Clone)]
struct InjectedFailure {
    status: u16,
    message: Option<String>,
}

#[derive(Debug, Default)]
struct MemoryState {
    doctors: Vec<Doctor>,
    tokens: HashMap<DoctorId, u64>,
    next_id: u64,
    failures: HashMap<Operation, InjectedFailure>,
    calls: HashMap<Operation, usize>,
}

/// Hospital service backed by process memory.
#[derive(Debug, Default)]
pub struct InMemoryHospitalService {
    state: Mutex<MemoryState>,
    latency: Option<Duration>,
}

impl InMemoryHospitalService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the roster.
    pub fn with_doctors(self, doctors: impl IntoIterator<Item = Doctor>) -> Self {
        self.state.lock().doctors.extend(doctors);
        self
    }

    /// Set the current token for a doctor; the next increment returns `value + 1`.
    pub fn with_token(self, doctor_id: impl Into<DoctorId>, value: u64) -> Self {
        self.state.lock().tokens.insert(doctor_id.into(), value);
        self
    }

    /// Delay every call, so in-flight states are observable.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Make the next call of `op` fail with the given status and message.
    pub fn fail_next(&self, op: Operation, status: u16, message: Option<&str>) {
        self.state.lock().failures.insert(
            op,
            InjectedFailure {
                status,
                message: message.map(str::to_string),
            },
        );
    }

    /// Number of calls made to `op` so far, including failed ones.
    pub fn calls(&self, op: Operation) -> usize {
        self.state.lock().calls.get(&op).copied().unwrap_or(0)
    }

    /// Current roster, in insertion order.
    pub fn doctors(&self) -> Vec<Doctor> {
        self.state.lock().doctors.clone()
    }

    async fn enter(&self, op: Operation) -> Result<(), ServiceError> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        let mut state = self.state.lock();
        *state.calls.entry(op).or_insert(0) += 1;
        match state.failures.remove(&op) {
            Some(failure) => Err(ServiceError::Rejected {
                status: failure.status,
                message: failure.message,
            }),
            None => Ok(()),
        }
    }
}

fn not_found() -> ServiceError {
    ServiceError::Rejected {
        status: 404,
        message: Some("Doctor not found".to_string()),
    }
}

#[async_trait]
impl HospitalService for InMemoryHospitalService {
    async fn list_doctors(&self) -> Result<Vec<Doctor>, ServiceError> {
        self.enter(Operation::ListDoctors).await?;
        Ok(self.state.lock().doctors.clone())
    }

    async fn create_doctor(&self, doctor: &NewDoctor) -> Result<Doctor, ServiceError> {
        self.enter(Operation::CreateDoctor).await?;
        let mut state = self.state.lock();
        // Skip ids already taken by seeded records.
        let id = loop {
            state.next_id += 1;
            let candidate = DoctorId::new(format!("doc-{}", state.next_id));
            if !state.doctors.iter().any(|d| d.id == candidate) {
                break candidate;
            }
        };
        let created = Doctor {
            id,
            name: doctor.name.clone(),
            specialization: doctor.specialization.clone(),
            availability: false,
        };
        state.doctors.push(created.clone());
        Ok(created)
    }

    async fn delete_doctor(&self, id: &DoctorId) -> Result<(), ServiceError> {
        self.enter(Operation::DeleteDoctor).await?;
        let mut state = self.state.lock();
        let before = state.doctors.len();
        state.doctors.retain(|d| &d.id != id);
        if state.doctors.len() == before {
            return Err(not_found());
        }
        state.tokens.remove(id);
        Ok(())
    }

    async fn increment_token(&self, doctor_id: &DoctorId) -> Result<u64, ServiceError> {
        self.enter(Operation::IncrementToken).await?;
        let mut state = self.state.lock();
        if !state.doctors.iter().any(|d| &d.id == doctor_id) {
            return Err(not_found());
        }
        let token = state.tokens.entry(doctor_id.clone()).or_insert(0);
        *token += 1;
        Ok(*token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lee() -> Doctor {
        Doctor {
            id: "d1".into(),
            name: "Lee".to_string(),
            specialization: "Cardiology".to_string(),
            availability: true,
        }
    }

    #[test]
    fn test_create_assigns_fresh_ids() {
        let service = InMemoryHospitalService::new().with_doctors([Doctor {
            id: "doc-1".into(),
            ..lee()
        }]);
        let created =
            tokio_test::block_on(service.create_doctor(&NewDoctor::new("Ng", "Neurology")))
                .unwrap();
        assert_eq!(created.id.as_str(), "doc-2");
        assert!(!created.availability);
        assert_eq!(service.doctors().len(), 2);
    }

    #[test]
    fn test_tokens_count_per_doctor() {
        let service = InMemoryHospitalService::new()
            .with_doctors([lee()])
            .with_token("d1", 2);
        let id: DoctorId = "d1".into();
        assert_eq!(tokio_test::block_on(service.increment_token(&id)).unwrap(), 3);
        assert_eq!(tokio_test::block_on(service.increment_token(&id)).unwrap(), 4);
        assert_eq!(service.calls(Operation::IncrementToken), 2);
    }

    #[test]
    fn test_unknown_ids_are_rejected() {
        let service = InMemoryHospitalService::new().with_doctors([lee()]);
        let err = tokio_test::block_on(service.delete_doctor(&"zz".into())).unwrap_err();
        assert!(matches!(err, ServiceError::Rejected { status: 404, .. }));
        let err = tokio_test::block_on(service.increment_token(&"zz".into())).unwrap_err();
        assert!(matches!(err, ServiceError::Rejected { status: 404, .. }));
        assert_eq!(service.doctors().len(), 1);
    }

    #[test]
    fn test_injected_failure_applies_once() {
        let service = InMemoryHospitalService::new().with_doctors([lee()]);
        service.fail_next(Operation::DeleteDoctor, 409, Some("in use"));

        let err = tokio_test::block_on(service.delete_doctor(&"d1".into())).unwrap_err();
        assert_eq!(err.server_message(), Some("in use"));
        assert_eq!(service.doctors().len(), 1);

        tokio_test::block_on(service.delete_doctor(&"d1".into())).unwrap();
        assert!(service.doctors().is_empty());
        assert_eq!(service.calls(Operation::DeleteDoctor), 2);
    }
}
