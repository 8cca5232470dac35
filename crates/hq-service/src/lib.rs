//! # HQ Service
//!
//! Client side of the hospital service: the doctor roster and the per-doctor
//! "now serving" token counter.
//!
//! ## Architecture
//!
//! ```text
//!            ┌──────────────────────────┐
//!  views ──→ │  HospitalService (port)  │
//!            └────────────┬─────────────┘
//!                ┌────────┴─────────┐
//!                ↓                  ↓
//!     HttpHospitalService   InMemoryHospitalService
//!        (reqwest/JSON)       (demo mode, tests)
//! ```
//!
//! ## Endpoints
//!
//! | Operation        | Request                                          |
//! |------------------|--------------------------------------------------|
//! | list doctors     | `GET /api/hospital/doctors`                      |
//! | create doctor    | `POST /api/hospital/doctors` `{name, specialization}` |
//! | delete doctor    | `DELETE /api/hospital/doctors/{id}`              |
//! | increment token  | `POST /api/token-management/increment-token` `{doctorId}` |
//!
//! Error responses may carry a `message` field, exposed through
//! [`ServiceError::server_message`].

pub mod error;
pub mod http;
pub mod memory;
pub mod port;
pub mod types;

pub use error::ServiceError;
pub use http::{HttpHospitalService, HttpSettings};
pub use memory::{InMemoryHospitalService, Operation};
pub use port::HospitalService;
pub use types::{Doctor, DoctorId, ErrorBody, IncrementTokenRequest, NewDoctor, TokenResponse};
