//! Requests issued by the views and the responses routed back to them.
//!
//! A view operation first validates and records its in-flight state, then
//! returns a [`Command`]. The runtime executes it against the hospital
//! service (on a spawned task) and delivers the [`Completion`] back to the
//! owning view.

use hq_service::{Doctor, DoctorId, HospitalService, NewDoctor, ServiceError};
use tracing::debug;

use super::Ticket;

/// Which view owns a roster fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewId {
    Directory,
    TokenPanel,
}

/// A single service request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    ListDoctors { view: ViewId, ticket: Ticket },
    CreateDoctor { doctor: NewDoctor },
    DeleteDoctor { id: DoctorId },
    IncrementToken { ticket: Ticket, doctor_id: DoctorId },
}

/// The response to a [`Command`].
#[derive(Debug)]
pub enum Completion {
    DoctorsListed {
        view: ViewId,
        ticket: Ticket,
        result: Result<Vec<Doctor>, ServiceError>,
    },
    DoctorCreated {
        result: Result<Doctor, ServiceError>,
    },
    DoctorDeleted {
        id: DoctorId,
        result: Result<(), ServiceError>,
    },
    TokenIncremented {
        ticket: Ticket,
        doctor_id: DoctorId,
        result: Result<u64, ServiceError>,
    },
}

/// Issue exactly one request for `command`.
pub async fn execute(service: &dyn HospitalService, command: Command) -> Completion {
    debug!(?command, "executing");
    match command {
        Command::ListDoctors { view, ticket } => Completion::DoctorsListed {
            view,
            ticket,
            result: service.list_doctors().await,
        },
        Command::CreateDoctor { doctor } => Completion::DoctorCreated {
            result: service.create_doctor(&doctor).await,
        },
        Command::DeleteDoctor { id } => {
            let result = service.delete_doctor(&id).await;
            Completion::DoctorDeleted { id, result }
        }
        Command::IncrementToken { ticket, doctor_id } => {
            let result = service.increment_token(&doctor_id).await;
            Completion::TokenIncremented {
                ticket,
                doctor_id,
                result,
            }
        }
    }
}
