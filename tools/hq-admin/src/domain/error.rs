//! Errors raised before any request is issued.

use thiserror::Error;

use super::Notice;

/// Validation and precondition failures. None of these reach the network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    /// A mandatory form field is blank.
    #[error("{0} is required")]
    Required(&'static str),
    #[error("Please select a doctor first")]
    NoDoctorSelected,
    /// The same action is still awaiting its response.
    #[error("{0} already in progress")]
    InFlight(&'static str),
}

impl From<ActionError> for Notice {
    fn from(err: ActionError) -> Self {
        Notice::error(err.to_string())
    }
}
