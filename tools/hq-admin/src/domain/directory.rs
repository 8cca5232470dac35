//! Doctor directory: list, create and delete doctors.

use std::collections::HashSet;

use hq_service::{Doctor, DoctorId, NewDoctor};
use tracing::{info, warn};

use super::{ActionError, Command, Completion, FetchOutcome, Notice, Roster, ViewId};

/// Prompt shown before a delete is issued.
pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this doctor?";

/// Which field of the "Add New Doctor" form has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Specialization,
}

/// Contents of the "Add New Doctor" form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateForm {
    pub name: String,
    pub specialization: String,
    pub focus: FormField,
}

impl CreateForm {
    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            FormField::Name => FormField::Specialization,
            FormField::Specialization => FormField::Name,
        };
    }

    pub fn input(&mut self, c: char) {
        self.focused_mut().push(c);
    }

    pub fn backspace(&mut self) {
        self.focused_mut().pop();
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            FormField::Name => &mut self.name,
            FormField::Specialization => &mut self.specialization,
        }
    }
}

/// State of the doctor directory view. Owned by a single writer.
#[derive(Debug, Default)]
pub struct DirectoryView {
    roster: Roster,
    /// Rows with a delete request outstanding.
    deleting: HashSet<DoctorId>,
    /// Row awaiting operator confirmation.
    pending_delete: Option<DoctorId>,
    /// Open form, if the modal is shown.
    form: Option<CreateForm>,
    submitting: bool,
    cursor: usize,
}

impl DirectoryView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn begin_list(&mut self) -> Command {
        Command::ListDoctors {
            view: ViewId::Directory,
            ticket: self.roster.begin_fetch(),
        }
    }

    pub fn open_form(&mut self) {
        if self.form.is_none() {
            self.form = Some(CreateForm::default());
        }
    }

    pub fn close_form(&mut self) {
        self.form = None;
    }

    pub fn form(&self) -> Option<&CreateForm> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut CreateForm> {
        self.form.as_mut()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Validate and issue a create request. Blank fields never reach the network.
    pub fn begin_create(
        &mut self,
        name: &str,
        specialization: &str,
    ) -> Result<Command, ActionError> {
        let name = name.trim();
        let specialization = specialization.trim();
        if name.is_empty() {
            return Err(ActionError::Required("Name"));
        }
        if specialization.is_empty() {
            return Err(ActionError::Required("Specialization"));
        }
        if self.submitting {
            return Err(ActionError::InFlight("Save"));
        }

        self.submitting = true;
        Ok(Command::CreateDoctor {
            doctor: NewDoctor::new(name, specialization),
        })
    }

    /// Submit the open form.
    pub fn submit_form(&mut self) -> Result<Command, ActionError> {
        let form = self.form.clone().unwrap_or_default();
        self.begin_create(&form.name, &form.specialization)
    }

    /// Ask for confirmation before deleting `id`.
    pub fn request_delete(&mut self, id: DoctorId) -> Result<(), ActionError> {
        if self.deleting.contains(&id) {
            return Err(ActionError::InFlight("Delete"));
        }
        self.pending_delete = Some(id);
        Ok(())
    }

    pub fn pending_delete(&self) -> Option<&DoctorId> {
        self.pending_delete.as_ref()
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Operator confirmed: mark the row as deleting and issue the request.
    pub fn confirm_delete(&mut self) -> Option<Command> {
        let id = self.pending_delete.take()?;
        if !self.deleting.insert(id.clone()) {
            return None;
        }
        Some(Command::DeleteDoctor { id })
    }

    pub fn is_deleting(&self, id: &DoctorId) -> bool {
        self.deleting.contains(id)
    }

    /// Apply a service response. Returns the notice to show, if any.
    pub fn apply(&mut self, completion: Completion) -> Option<Notice> {
        match completion {
            Completion::DoctorsListed {
                view: ViewId::Directory,
                ticket,
                result,
            } => match self.roster.apply_fetch(ticket, result) {
                FetchOutcome::Applied => {
                    self.clamp_cursor();
                    None
                }
                FetchOutcome::Stale => None,
                FetchOutcome::Failed => Some(Notice::error("Failed to fetch doctors")),
            },
            Completion::DoctorCreated { result } => {
                self.submitting = false;
                match result {
                    Ok(doctor) => {
                        info!(id = %doctor.id, name = %doctor.name, "doctor added");
                        self.roster.append(doctor);
                        self.form = None;
                        Some(Notice::success("Doctor added successfully"))
                    }
                    Err(e) => {
                        warn!(error = %e, "failed to add doctor");
                        Some(Notice::error(e.message_or("Failed to add doctor")))
                    }
                }
            }
            Completion::DoctorDeleted { id, result } => {
                self.deleting.remove(&id);
                match result {
                    Ok(()) => {
                        info!(%id, "doctor deleted");
                        self.roster.remove(&id);
                        self.clamp_cursor();
                        Some(Notice::success("Doctor deleted successfully"))
                    }
                    Err(e) => {
                        warn!(%id, error = %e, "failed to delete doctor");
                        Some(Notice::error(e.message_or("Failed to delete doctor")))
                    }
                }
            }
            Completion::DoctorsListed { .. } | Completion::TokenIncremented { .. } => None,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selected(&self) -> Option<&Doctor> {
        self.roster.doctors().get(self.cursor)
    }

    pub fn select_prev(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.cursor + 1 < self.roster.len() {
            self.cursor += 1;
        }
    }

    fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.roster.len().saturating_sub(1));
    }
}
