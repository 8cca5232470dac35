//! Per-view roster snapshot.

use hq_service::{Doctor, DoctorId, ServiceError};
use tracing::{debug, warn};

use super::{RequestSeq, Ticket};

/// Outcome of applying a fetch response.
#[derive(Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Snapshot replaced.
    Applied,
    /// Response belonged to a superseded fetch and was ignored.
    Stale,
    /// Fetch failed; previous snapshot kept.
    Failed,
}

/// The last successful list response, replaced wholesale on each fetch.
///
/// Only the most recently issued fetch may be applied. A local mutation
/// (append/remove) also supersedes fetches issued before it, since their
/// responses may predate the mutation.
#[derive(Debug, Default)]
pub struct Roster {
    doctors: Vec<Doctor>,
    fetches: RequestSeq,
    loading: bool,
    refreshes: u64,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn len(&self) -> usize {
        self.doctors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.doctors.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Number of fetch responses applied so far.
    pub fn refreshes(&self) -> u64 {
        self.refreshes
    }

    pub fn get(&self, id: &DoctorId) -> Option<&Doctor> {
        self.doctors.iter().find(|d| &d.id == id)
    }

    pub fn begin_fetch(&mut self) -> Ticket {
        self.loading = true;
        self.fetches.issue()
    }

    pub fn apply_fetch(
        &mut self,
        ticket: Ticket,
        result: Result<Vec<Doctor>, ServiceError>,
    ) -> FetchOutcome {
        if !self.fetches.is_current(ticket) {
            debug!(?ticket, "discarding stale roster response");
            return FetchOutcome::Stale;
        }

        self.loading = false;
        match result {
            Ok(doctors) => {
                debug!(count = doctors.len(), "roster replaced");
                self.doctors = doctors;
                self.refreshes += 1;
                FetchOutcome::Applied
            }
            Err(e) => {
                warn!(error = %e, "failed to fetch doctors");
                FetchOutcome::Failed
            }
        }
    }

    pub fn append(&mut self, doctor: Doctor) {
        self.supersede_fetches();
        self.doctors.push(doctor);
    }

    /// Remove a doctor by id; other members are untouched.
    pub fn remove(&mut self, id: &DoctorId) -> Option<Doctor> {
        self.supersede_fetches();
        let index = self.doctors.iter().position(|d| &d.id == id)?;
        Some(self.doctors.remove(index))
    }

    fn supersede_fetches(&mut self) {
        self.fetches.invalidate();
        self.loading = false;
    }
}
