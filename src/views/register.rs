use time::Date;

use crate::error::{AppError, AppResult};
use crate::models::{CreateEmployee, EmployeeRole, EmployeeStatus};
use crate::services::EmployeeService;

/// Registration form state. Validation runs before any request is
/// produced; a failed `submit` means nothing left the client.
///
/// Account creation and image upload are two independent steps: the
/// payload from `submit` creates the account, and `has_image` tells the
/// caller whether to follow up with an upload keyed by the returned id.
/// An upload failure leaves the created account in place.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub name: String,
    pub designation: String,
    pub address: String,
    pub department: String,
    pub joining_date: Option<Date>,
    pub skillset: String,
    pub username: String,
    pub password: String,
    pub confirm_password: String,
    /// Selected image file name, uploaded in the second step
    pub image: Option<String>,
}

/// Empty inputs become explicit absence, never empty strings
fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

impl RegistrationForm {
    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    /// Validate and build the account-creation payload
    pub fn submit(&self) -> AppResult<CreateEmployee> {
        if self.password != self.confirm_password {
            return Err(AppError::Validation("Passwords do not match".to_string()));
        }
        if self.name.trim().is_empty() {
            return Err(AppError::Validation("Name is required".to_string()));
        }
        if self.username.trim().is_empty() {
            return Err(AppError::Validation("Username is required".to_string()));
        }
        if self.password.len() < EmployeeService::MIN_PASSWORD_LEN {
            return Err(AppError::Validation(
                "Password must be at least 6 characters".to_string(),
            ));
        }

        Ok(CreateEmployee {
            name: self.name.trim().to_string(),
            username: self.username.trim().to_string(),
            password: self.password.clone(),
            designation: optional(&self.designation),
            address: optional(&self.address),
            department: optional(&self.department),
            joining_date: self.joining_date,
            skillset: optional(&self.skillset),
            role: Some(EmployeeRole::Employee),
            status: Some(EmployeeStatus::Active),
            created_by: Some("Self".to_string()),
        })
    }
}
