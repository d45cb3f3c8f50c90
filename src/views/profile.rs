use time::Date;

use crate::models::{EmployeeResponse, UpdateEmployee};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileMode {
    Viewing,
    Editing,
}

/// Editable subset of an employee's own record. Identity and account
/// fields (id, username, status, role) are not representable here.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileDraft {
    pub name: String,
    pub designation: Option<String>,
    pub address: Option<String>,
    pub department: Option<String>,
    pub joining_date: Option<Date>,
    pub skillset: Option<String>,
}

impl From<&EmployeeResponse> for ProfileDraft {
    fn from(e: &EmployeeResponse) -> Self {
        Self {
            name: e.name.clone(),
            designation: e.designation.clone(),
            address: e.address.clone(),
            department: e.department.clone(),
            joining_date: e.joining_date,
            skillset: e.skillset.clone(),
        }
    }
}

/// Self-service profile: the owner's record with a toggled edit mode.
/// Cancel discards the draft and falls back to the last-fetched snapshot.
#[derive(Debug)]
pub struct ProfileView {
    snapshot: EmployeeResponse,
    mode: ProfileMode,
    draft: Option<ProfileDraft>,
}

impl ProfileView {
    pub fn new(snapshot: EmployeeResponse) -> Self {
        Self {
            snapshot,
            mode: ProfileMode::Viewing,
            draft: None,
        }
    }

    pub fn mode(&self) -> ProfileMode {
        self.mode
    }

    /// The last-fetched authoritative record
    pub fn employee(&self) -> &EmployeeResponse {
        &self.snapshot
    }

    pub fn begin_edit(&mut self) {
        if self.mode == ProfileMode::Editing {
            return;
        }
        self.draft = Some(ProfileDraft::from(&self.snapshot));
        self.mode = ProfileMode::Editing;
    }

    pub fn draft_mut(&mut self) -> Option<&mut ProfileDraft> {
        self.draft.as_mut()
    }

    /// Discard in-progress edits and show the snapshot again
    pub fn cancel_edit(&mut self) {
        self.draft = None;
        self.mode = ProfileMode::Viewing;
    }

    /// Leave Editing and hand the partial update to the caller for
    /// dispatch. Status is never part of an owner's payload.
    pub fn save(&mut self) -> Option<(i32, UpdateEmployee)> {
        let draft = self.draft.take()?;
        self.mode = ProfileMode::Viewing;

        Some((
            self.snapshot.employee_id,
            UpdateEmployee {
                name: Some(draft.name),
                designation: draft.designation,
                address: draft.address,
                department: draft.department,
                joining_date: draft.joining_date,
                skillset: draft.skillset,
                status: None,
            },
        ))
    }

    /// Install the re-fetched record after a successful save
    pub fn refresh(&mut self, snapshot: EmployeeResponse) {
        self.snapshot = snapshot;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EmployeeRole, EmployeeStatus};
    use time::macros::datetime;

    fn snapshot() -> EmployeeResponse {
        EmployeeResponse {
            employee_id: 7,
            name: "Dana Cruz".to_string(),
            designation: Some("Engineer".to_string()),
            address: None,
            department: Some("Platform".to_string()),
            joining_date: None,
            skillset: Some("Rust".to_string()),
            username: "dcruz".to_string(),
            status: EmployeeStatus::Active,
            role: EmployeeRole::Employee,
            profile_image: None,
            created_by: Some("Self".to_string()),
            modified_by: None,
            created_at: datetime!(2024-01-01 0:00 UTC),
            modified_at: datetime!(2024-01-01 0:00 UTC),
        }
    }

    #[test]
    fn test_begin_edit_seeds_draft_from_snapshot() {
        let mut view = ProfileView::new(snapshot());
        assert_eq!(view.mode(), ProfileMode::Viewing);

        view.begin_edit();
        assert_eq!(view.mode(), ProfileMode::Editing);
        assert_eq!(view.draft_mut().unwrap().name, "Dana Cruz");
    }

    #[test]
    fn test_cancel_restores_last_fetched_snapshot() {
        let mut view = ProfileView::new(snapshot());
        view.begin_edit();
        view.draft_mut().unwrap().name = "Someone Else".to_string();
        view.draft_mut().unwrap().department = None;

        view.cancel_edit();

        assert_eq!(view.mode(), ProfileMode::Viewing);
        assert_eq!(view.employee().name, "Dana Cruz");
        assert_eq!(view.employee().department.as_deref(), Some("Platform"));
        assert!(view.save().is_none());
    }

    #[test]
    fn test_save_produces_partial_payload_without_status() {
        let mut view = ProfileView::new(snapshot());
        view.begin_edit();
        view.draft_mut().unwrap().designation = Some("Senior Engineer".to_string());

        let (id, payload) = view.save().unwrap();
        assert_eq!(id, 7);
        assert_eq!(payload.designation.as_deref(), Some("Senior Engineer"));
        assert_eq!(payload.name.as_deref(), Some("Dana Cruz"));
        assert!(payload.status.is_none());
        assert_eq!(view.mode(), ProfileMode::Viewing);
    }

    #[test]
    fn test_refresh_installs_new_snapshot() {
        let mut view = ProfileView::new(snapshot());

        let mut updated = snapshot();
        updated.designation = Some("Staff Engineer".to_string());
        view.refresh(updated);

        assert_eq!(
            view.employee().designation.as_deref(),
            Some("Staff Engineer")
        );
    }
}
