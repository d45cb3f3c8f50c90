use sea_orm::DatabaseConnection;
use time::OffsetDateTime;

use crate::error::{AppError, AppResult};
use crate::middlewares::AuthUser;
use crate::models::{CreateEmployee, Employee, EmployeeRole, EmployeeStatus, UpdateEmployee};
use crate::repositories::{EmployeeRepository, Repository};
use crate::services::AuthService;

/// Owns the employee entity contract: who may change which fields, and how
/// partial updates are merged into the stored row.
pub struct EmployeeService;

impl EmployeeService {
    pub const MIN_PASSWORD_LEN: usize = 6;

    /// Look up by username and verify the password.
    ///
    /// Unknown username and wrong password collapse into the same rejection;
    /// callers cannot tell the two apart.
    pub async fn authenticate(
        db: &DatabaseConnection,
        username: &str,
        password: &str,
    ) -> AppResult<Employee> {
        let employee = EmployeeRepository::find_by_username(db, username)
            .await
            .map_err(|_| AppError::InvalidCredentials)?;

        let is_valid = AuthService::verify_password(password, &employee.password_hash)?;
        if !is_valid {
            return Err(AppError::InvalidCredentials);
        }

        Ok(employee)
    }

    /// Create a new account. Role defaults to Employee, status to Active,
    /// created_by to "Self".
    pub async fn register(db: &DatabaseConnection, input: CreateEmployee) -> AppResult<Employee> {
        if input.name.trim().is_empty() {
            return Err(AppError::Validation("Name is required".to_string()));
        }
        if input.username.trim().is_empty() {
            return Err(AppError::Validation("Username is required".to_string()));
        }
        if input.password.len() < Self::MIN_PASSWORD_LEN {
            return Err(AppError::Validation(
                "Password must be at least 6 characters".to_string(),
            ));
        }

        // Early check; the unique constraint still backstops a race
        if EmployeeRepository::username_exists(db, &input.username).await? {
            return Err(AppError::Conflict("Username already exists".to_string()));
        }

        let password_hash = AuthService::hash_password(&input.password)?;
        let employee = EmployeeRepository::create(db, &input, &password_hash).await?;

        tracing::info!(employee_id = employee.employee_id, "employee registered");
        Ok(employee)
    }

    pub async fn get(db: &DatabaseConnection, id: i32) -> AppResult<Employee> {
        EmployeeRepository::find_by_id(db, id).await
    }

    pub async fn get_all(db: &DatabaseConnection) -> AppResult<Vec<Employee>> {
        EmployeeRepository::list(db).await
    }

    /// Apply a partial update with read-merge-write discipline.
    ///
    /// The current row is fetched, only the supplied fields are spliced in,
    /// and the full merged row is written back, so a status-only payload
    /// never clobbers unrelated fields. The requester's role is re-read from
    /// the store; the role claimed in the token is not trusted. Non-admins
    /// may update only their own record and may not change status.
    ///
    /// Returns the affected-row count.
    pub async fn update(
        db: &DatabaseConnection,
        id: i32,
        fields: &UpdateEmployee,
        auth: &AuthUser,
        modified_by: Option<String>,
    ) -> AppResult<u64> {
        let actor = EmployeeRepository::find_by_id(db, auth.id).await?;
        if actor.role != EmployeeRole::Admin {
            if actor.employee_id != id {
                return Err(AppError::Forbidden);
            }
            if fields.status.is_some() {
                return Err(AppError::Forbidden);
            }
        }

        let mut current = EmployeeRepository::find_by_id(db, id).await?;

        if let Some(name) = &fields.name {
            current.name = name.clone();
        }
        if let Some(designation) = &fields.designation {
            current.designation = Some(designation.clone());
        }
        if let Some(address) = &fields.address {
            current.address = Some(address.clone());
        }
        if let Some(department) = &fields.department {
            current.department = Some(department.clone());
        }
        if let Some(joining_date) = fields.joining_date {
            current.joining_date = Some(joining_date);
        }
        if let Some(skillset) = &fields.skillset {
            current.skillset = Some(skillset.clone());
        }
        if let Some(status) = fields.status {
            current.status = status;
        }
        current.modified_by = Some(modified_by.unwrap_or_else(|| "System".to_string()));
        current.modified_at = OffsetDateTime::now_utc();

        EmployeeRepository::save(db, &current).await
    }

    /// Status-only update through the same merge discipline
    pub async fn set_status(
        db: &DatabaseConnection,
        id: i32,
        status: EmployeeStatus,
        auth: &AuthUser,
        modified_by: Option<String>,
    ) -> AppResult<u64> {
        let fields = UpdateEmployee {
            status: Some(status),
            ..Default::default()
        };
        Self::update(db, id, &fields, auth, modified_by).await
    }

    /// Attach an uploaded image reference. Deliberately independent of the
    /// registration write: a failure here leaves the account untouched.
    pub async fn attach_profile_image(
        db: &DatabaseConnection,
        id: i32,
        path: &str,
    ) -> AppResult<()> {
        EmployeeRepository::set_profile_image(db, id, path).await
    }

    /// Remove an employee record. Admin only.
    pub async fn delete(db: &DatabaseConnection, id: i32, auth: &AuthUser) -> AppResult<()> {
        let actor = EmployeeRepository::find_by_id(db, auth.id).await?;
        if actor.role != EmployeeRole::Admin {
            return Err(AppError::Forbidden);
        }

        EmployeeRepository::delete(db, id).await
    }
}
