//! Token panel: select a doctor and advance their "now serving" token.
//!
//! The displayed token is always the value returned by the most recent
//! increment for the current selection. It is never computed locally and
//! never carried over to another doctor.

use hq_service::{Doctor, DoctorId};
use tracing::{debug, info, warn};

use super::{
    ActionError, Command, Completion, FetchOutcome, Notice, RequestSeq, Roster, Ticket, ViewId,
};

/// State of the token panel view. Owned by a single writer.
#[derive(Debug, Default)]
pub struct TokenPanel {
    roster: Roster,
    selected: Option<DoctorId>,
    token: Option<u64>,
    detail_open: bool,
    /// The increment awaiting a response. Survives reselection and closing
    /// the detail view; the trigger stays disabled until it settles.
    outstanding: Option<Ticket>,
    /// Increments issued for an earlier selection become stale.
    interactions: RequestSeq,
    cursor: usize,
}

impl TokenPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn begin_list(&mut self) -> Command {
        Command::ListDoctors {
            view: ViewId::TokenPanel,
            ticket: self.roster.begin_fetch(),
        }
    }

    pub fn selected_id(&self) -> Option<&DoctorId> {
        self.selected.as_ref()
    }

    /// Selected doctor's record from the current snapshot.
    pub fn selected_doctor(&self) -> Option<&Doctor> {
        self.selected.as_ref().and_then(|id| self.roster.get(id))
    }

    /// Token value to display, if one was received in this interaction.
    pub fn token(&self) -> Option<u64> {
        self.token
    }

    pub fn is_detail_open(&self) -> bool {
        self.detail_open
    }

    /// Whether the increment trigger is disabled.
    pub fn is_in_flight(&self) -> bool {
        self.outstanding.is_some()
    }

    /// Target a doctor. Clears the displayed token and opens the detail view.
    pub fn select_doctor(&mut self, id: DoctorId) {
        debug!(%id, "doctor selected");
        self.selected = Some(id);
        self.start_interaction();
        self.detail_open = true;
    }

    /// Hide the detail view and discard the displayed token. The selection is kept.
    pub fn close_detail_view(&mut self) {
        self.start_interaction();
        self.detail_open = false;
    }

    /// Reopen the detail view for the retained selection ("Manage Doctor").
    pub fn open_detail_view(&mut self) -> Result<(), ActionError> {
        if self.selected.is_none() {
            return Err(ActionError::NoDoctorSelected);
        }
        self.detail_open = true;
        Ok(())
    }

    /// Issue one increment for the selected doctor.
    pub fn begin_increment(&mut self) -> Result<Command, ActionError> {
        let doctor_id = self.selected.clone().ok_or(ActionError::NoDoctorSelected)?;
        if self.outstanding.is_some() {
            return Err(ActionError::InFlight("Token request"));
        }

        let ticket = self.interactions.issue();
        self.outstanding = Some(ticket);
        Ok(Command::IncrementToken { ticket, doctor_id })
    }

    /// Apply a service response. Returns the notice to show, if any.
    pub fn apply(&mut self, completion: Completion) -> Option<Notice> {
        match completion {
            Completion::DoctorsListed {
                view: ViewId::TokenPanel,
                ticket,
                result,
            } => match self.roster.apply_fetch(ticket, result) {
                FetchOutcome::Applied => {
                    self.cursor = self.cursor.min(self.roster.len().saturating_sub(1));
                    None
                }
                FetchOutcome::Stale => None,
                FetchOutcome::Failed => Some(Notice::error("Failed to fetch doctors")),
            },
            Completion::TokenIncremented {
                ticket,
                doctor_id,
                result,
            } => {
                if self.outstanding == Some(ticket) {
                    self.outstanding = None;
                }
                if !self.interactions.is_current(ticket) {
                    debug!(
                        %doctor_id,
                        ok = result.is_ok(),
                        "discarding token for a previous selection"
                    );
                    return None;
                }
                match result {
                    Ok(token) => {
                        info!(%doctor_id, token, "token incremented");
                        self.token = Some(token);
                        Some(Notice::success("Token incremented successfully"))
                    }
                    Err(e) => {
                        warn!(%doctor_id, error = %e, "failed to increment token");
                        Some(Notice::error("Error incrementing token"))
                    }
                }
            }
            Completion::DoctorsListed { .. }
            | Completion::DoctorCreated { .. }
            | Completion::DoctorDeleted { .. } => None,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn select_prev(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.cursor + 1 < self.roster.len() {
            self.cursor += 1;
        }
    }

    /// Select the doctor under the cursor.
    pub fn select_at_cursor(&mut self) -> Option<&DoctorId> {
        let id = self.roster.doctors().get(self.cursor)?.id.clone();
        self.select_doctor(id);
        self.selected.as_ref()
    }

    fn start_interaction(&mut self) {
        self.token = None;
        self.interactions.invalidate();
    }
}

#[cfg(test)]
mod tests {
    use hq_service::{InMemoryHospitalService, Operation};

    use super::*;
    use crate::domain::execute;

    fn doctor(id: &str, name: &str) -> Doctor {
        Doctor {
            id: id.into(),
            name: name.to_string(),
            specialization: "Cardiology".to_string(),
            availability: true,
        }
    }

    async fn run(
        panel: &mut TokenPanel,
        service: &InMemoryHospitalService,
        command: Command,
    ) -> Option<Notice> {
        let completion = execute(service, command).await;
        panel.apply(completion)
    }

    #[test]
    fn test_increment_without_selection_issues_no_request() {
        let service = InMemoryHospitalService::new();
        let mut panel = TokenPanel::new();

        let err = panel.begin_increment().unwrap_err();
        assert_eq!(Notice::from(err).text, "Please select a doctor first");
        assert!(!panel.is_in_flight());
        assert_eq!(service.calls(Operation::IncrementToken), 0);
    }

    #[tokio::test]
    async fn test_displays_server_values_only() {
        let service = InMemoryHospitalService::new()
            .with_doctors([doctor("d1", "Lee")])
            .with_token("d1", 2);
        let mut panel = TokenPanel::new();
        panel.select_doctor("d1".into());
        assert!(panel.is_detail_open());

        let command = panel.begin_increment().unwrap();
        let notice = run(&mut panel, &service, command).await.unwrap();
        assert_eq!(notice, Notice::success("Token incremented successfully"));
        assert_eq!(panel.token(), Some(3));

        let command = panel.begin_increment().unwrap();
        run(&mut panel, &service, command).await;
        assert_eq!(panel.token(), Some(4));
    }

    #[test]
    fn test_trigger_disabled_while_in_flight() {
        let mut panel = TokenPanel::new();
        panel.select_doctor("d1".into());

        let first = panel.begin_increment().unwrap();
        assert!(panel.is_in_flight());
        assert_eq!(
            panel.begin_increment(),
            Err(ActionError::InFlight("Token request"))
        );

        let Command::IncrementToken { ticket, doctor_id } = first else {
            panic!("expected increment command");
        };
        panel.apply(Completion::TokenIncremented {
            ticket,
            doctor_id,
            result: Ok(7),
        });
        assert!(!panel.is_in_flight());
        assert!(panel.begin_increment().is_ok());
    }

    #[tokio::test]
    async fn test_failure_keeps_previous_value() {
        let service = InMemoryHospitalService::new()
            .with_doctors([doctor("d1", "Lee")])
            .with_token("d1", 4);
        let mut panel = TokenPanel::new();
        panel.select_doctor("d1".into());
        let command = panel.begin_increment().unwrap();
        run(&mut panel, &service, command).await;
        assert_eq!(panel.token(), Some(5));

        service.fail_next(Operation::IncrementToken, 503, Some("down"));
        let command = panel.begin_increment().unwrap();
        let notice = run(&mut panel, &service, command).await.unwrap();
        assert_eq!(notice, Notice::error("Error incrementing token"));
        assert_eq!(panel.token(), Some(5));
        assert!(!panel.is_in_flight());
    }

    #[tokio::test]
    async fn test_selection_change_clears_token() {
        let service = InMemoryHospitalService::new()
            .with_doctors([doctor("a", "Lee"), doctor("b", "Ng")])
            .with_token("a", 4);
        let mut panel = TokenPanel::new();

        panel.select_doctor("a".into());
        let command = panel.begin_increment().unwrap();
        run(&mut panel, &service, command).await;
        assert_eq!(panel.token(), Some(5));

        panel.select_doctor("b".into());
        assert_eq!(panel.token(), None);
        assert_eq!(service.calls(Operation::IncrementToken), 1);
    }

    #[test]
    fn test_response_for_previous_selection_is_discarded() {
        let mut panel = TokenPanel::new();
        panel.select_doctor("a".into());
        let Command::IncrementToken { ticket, doctor_id } = panel.begin_increment().unwrap() else {
            panic!("expected increment command");
        };

        panel.select_doctor("b".into());
        let notice = panel.apply(Completion::TokenIncremented {
            ticket,
            doctor_id,
            result: Ok(9),
        });

        assert!(notice.is_none());
        assert_eq!(panel.token(), None);
        assert_eq!(panel.selected_id(), Some(&DoctorId::from("b")));
        assert!(!panel.is_in_flight());
    }

    #[test]
    fn test_reselect_keeps_trigger_disabled_until_settled() {
        let mut panel = TokenPanel::new();
        panel.select_doctor("a".into());
        let Command::IncrementToken { ticket, doctor_id } = panel.begin_increment().unwrap() else {
            panic!("expected increment command");
        };

        panel.select_doctor("b".into());
        assert!(panel.is_in_flight());
        assert_eq!(
            panel.begin_increment(),
            Err(ActionError::InFlight("Token request"))
        );

        panel.apply(Completion::TokenIncremented {
            ticket,
            doctor_id,
            result: Ok(9),
        });
        assert_eq!(panel.token(), None);
        assert!(panel.begin_increment().is_ok());
    }

    #[test]
    fn test_close_and_reopen_while_pending() {
        let mut panel = TokenPanel::new();
        panel.select_doctor("a".into());
        let Command::IncrementToken { ticket, doctor_id } = panel.begin_increment().unwrap() else {
            panic!("expected increment command");
        };

        panel.close_detail_view();
        panel.open_detail_view().unwrap();
        assert!(panel.is_in_flight());
        assert!(panel.begin_increment().is_err());

        panel.apply(Completion::TokenIncremented {
            ticket,
            doctor_id,
            result: Err(hq_service::ServiceError::Connection("refused".to_string())),
        });
        assert!(!panel.is_in_flight());
    }

    #[test]
    fn test_close_keeps_selection_and_clears_token() {
        let mut panel = TokenPanel::new();
        panel.select_doctor("a".into());
        let Command::IncrementToken { ticket, doctor_id } = panel.begin_increment().unwrap() else {
            panic!("expected increment command");
        };
        panel.apply(Completion::TokenIncremented {
            ticket,
            doctor_id,
            result: Ok(3),
        });
        assert_eq!(panel.token(), Some(3));

        panel.close_detail_view();
        assert!(!panel.is_detail_open());
        assert_eq!(panel.token(), None);
        assert_eq!(panel.selected_id(), Some(&DoctorId::from("a")));

        panel.open_detail_view().unwrap();
        assert!(panel.is_detail_open());
        assert_eq!(panel.token(), None);
    }

    #[test]
    fn test_open_detail_requires_selection() {
        let mut panel = TokenPanel::new();
        assert_eq!(panel.open_detail_view(), Err(ActionError::NoDoctorSelected));
    }

    #[test]
    fn test_select_at_cursor() {
        let service =
            InMemoryHospitalService::new().with_doctors([doctor("a", "Lee"), doctor("b", "Ng")]);
        let mut panel = TokenPanel::new();
        let command = panel.begin_list();
        assert!(tokio_test::block_on(run(&mut panel, &service, command)).is_none());

        panel.select_next();
        let selected = panel.select_at_cursor().cloned();
        assert_eq!(selected, Some(DoctorId::from("b")));
        assert_eq!(panel.selected_doctor().map(|d| d.name.as_str()), Some("Ng"));
    }
}
