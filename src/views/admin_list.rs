use std::collections::HashSet;

use crate::models::{EmployeeResponse, EmployeeRole, LoginEmployee, UpdateEmployee};

/// Rows shown per page in the admin table
pub const PAGE_SIZE: usize = 5;

/// Working copy of the single row currently being edited
#[derive(Debug, Clone, PartialEq)]
pub struct EditingRow {
    pub employee_id: i32,
    pub draft: UpdateEmployee,
}

/// A status flip applied locally and awaiting backend confirmation
#[derive(Debug, Clone, PartialEq)]
pub struct PendingToggle {
    pub employee_id: i32,
    pub new_status: crate::models::EmployeeStatus,
}

/// What the caller must do after a toggle resolves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Backend confirmed; local state already reflects it
    Committed,
    /// Backend rejected; refetch the authoritative list and `load` it
    ReloadRequired,
}

/// Admin employee table: search filter, pagination, one-row inline edit and
/// optimistic status toggling over an authoritative list.
///
/// The view never talks to the network itself. Mutating transitions hand
/// back the request the caller must issue; a failed toggle is rolled back
/// by loading the refetched authoritative list, not by patching in place.
///
/// The session is passed in explicitly; mutations are refused up front for
/// non-admin sessions. The service re-validates the role regardless.
#[derive(Debug)]
pub struct AdminListView {
    session: LoginEmployee,
    employees: Vec<EmployeeResponse>,
    search_term: String,
    page: usize,
    editing: Option<EditingRow>,
    in_flight: HashSet<i32>,
}

impl AdminListView {
    pub fn new(session: LoginEmployee) -> Self {
        Self {
            session,
            employees: Vec::new(),
            search_term: String::new(),
            page: 1,
            editing: None,
            in_flight: HashSet::new(),
        }
    }

    pub fn session(&self) -> &LoginEmployee {
        &self.session
    }

    fn is_admin(&self) -> bool {
        self.session.role == EmployeeRole::Admin
    }

    /// Replace the authoritative list. Resets to page 1 and discards any
    /// in-progress edit. Also serves as the rollback path after a failed
    /// optimistic toggle.
    pub fn load(&mut self, employees: Vec<EmployeeResponse>) {
        self.employees = employees;
        self.page = 1;
        self.editing = None;
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Update the search filter; recomputing the filtered set resets
    /// pagination to page 1.
    pub fn set_search(&mut self, term: &str) {
        self.search_term = term.to_string();
        self.page = 1;
    }

    /// Case-insensitive substring match over name, username and department
    pub fn filtered(&self) -> Vec<&EmployeeResponse> {
        let needle = self.search_term.to_lowercase();
        self.employees
            .iter()
            .filter(|e| {
                e.name.to_lowercase().contains(&needle)
                    || e.username.to_lowercase().contains(&needle)
                    || e.department
                        .as_deref()
                        .is_some_and(|d| d.to_lowercase().contains(&needle))
            })
            .collect()
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// At least one page, even when the filtered set is empty
    pub fn page_count(&self) -> usize {
        std::cmp::max(1, self.filtered().len().div_ceil(PAGE_SIZE))
    }

    /// Navigate to a page; out-of-range targets are a no-op
    pub fn goto_page(&mut self, page: usize) {
        if page < 1 || page > self.page_count() {
            return;
        }
        self.page = page;
    }

    /// The current page slice of the filtered list
    pub fn visible_rows(&self) -> Vec<&EmployeeResponse> {
        let start = (self.page - 1) * PAGE_SIZE;
        self.filtered().into_iter().skip(start).take(PAGE_SIZE).collect()
    }

    pub fn editing(&self) -> Option<&EditingRow> {
        self.editing.as_ref()
    }

    /// Enter Editing for one row, seeding the working copy from its current
    /// values. Refused while another row is already being edited, and for
    /// non-admin sessions.
    pub fn begin_edit(&mut self, employee_id: i32) -> bool {
        if !self.is_admin() || self.editing.is_some() {
            return false;
        }
        let Some(row) = self.employees.iter().find(|e| e.employee_id == employee_id) else {
            return false;
        };

        self.editing = Some(EditingRow {
            employee_id,
            draft: UpdateEmployee {
                name: Some(row.name.clone()),
                designation: row.designation.clone(),
                address: row.address.clone(),
                department: row.department.clone(),
                joining_date: row.joining_date,
                skillset: row.skillset.clone(),
                status: Some(row.status),
            },
        });
        true
    }

    pub fn edit_draft_mut(&mut self) -> Option<&mut UpdateEmployee> {
        self.editing.as_mut().map(|e| &mut e.draft)
    }

    /// Discard the working copy; no request is produced
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Leave Editing and hand the working copy to the caller for dispatch.
    /// The caller refreshes the list via `load` once the update lands.
    pub fn save_edit(&mut self) -> Option<(i32, UpdateEmployee)> {
        self.editing
            .take()
            .map(|e| (e.employee_id, e.draft))
    }

    /// Flip a row's status in place and return the update to issue.
    /// Refused for non-admin sessions and while a toggle for the same
    /// record is still in flight.
    pub fn toggle_status(&mut self, employee_id: i32) -> Option<PendingToggle> {
        if !self.is_admin() || self.in_flight.contains(&employee_id) {
            return None;
        }
        let row = self
            .employees
            .iter_mut()
            .find(|e| e.employee_id == employee_id)?;

        let new_status = row.status.toggled();
        row.status = new_status;
        self.in_flight.insert(employee_id);

        Some(PendingToggle {
            employee_id,
            new_status,
        })
    }

    /// Resolve an in-flight toggle. On failure the tentative value is not
    /// patched back; the caller refetches and `load`s the authoritative
    /// list instead.
    pub fn resolve_toggle(&mut self, employee_id: i32, success: bool) -> ToggleOutcome {
        self.in_flight.remove(&employee_id);
        if success {
            ToggleOutcome::Committed
        } else {
            ToggleOutcome::ReloadRequired
        }
    }
}
