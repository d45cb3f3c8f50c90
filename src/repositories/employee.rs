use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

use crate::entity::employee::{self, ActiveModel, Column, Entity as EmployeeEntity};
use crate::entity::employee::{EmployeeRole, EmployeeStatus};
use crate::error::{AppError, AppResult};
use crate::models::{CreateEmployee, Employee};
use crate::repositories::Repository;

/// Employee repository for database operations.
///
/// This is the only layer that talks to the store; it maps rows to the
/// domain model and carries no business rules. All queries go through the
/// SeaORM builders, so every value is bound as a parameter.
pub struct EmployeeRepository;

// Implement the base Repository trait
#[async_trait]
impl Repository<Employee> for EmployeeRepository {
    async fn find_by_id(db: &DatabaseConnection, id: i32) -> AppResult<Employee> {
        let model = EmployeeEntity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::NotFound("Employee".to_string()))?;

        Ok(model.into())
    }

    async fn delete(db: &DatabaseConnection, id: i32) -> AppResult<()> {
        let result = EmployeeEntity::delete_by_id(id).exec(db).await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound("Employee".to_string()));
        }

        Ok(())
    }

    async fn list(db: &DatabaseConnection) -> AppResult<Vec<Employee>> {
        let models = EmployeeEntity::find()
            .order_by_asc(Column::EmployeeId)
            .all(db)
            .await?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    async fn count(db: &DatabaseConnection) -> AppResult<u64> {
        let count = EmployeeEntity::find().count(db).await?;
        Ok(count)
    }
}

// Employee-specific methods (not in the base trait)
impl EmployeeRepository {
    /// Create a new employee; the store assigns the id
    pub async fn create(
        db: &DatabaseConnection,
        input: &CreateEmployee,
        password_hash: &str,
    ) -> AppResult<Employee> {
        let now = time::OffsetDateTime::now_utc();

        let model = ActiveModel {
            name: Set(input.name.clone()),
            designation: Set(input.designation.clone()),
            address: Set(input.address.clone()),
            department: Set(input.department.clone()),
            joining_date: Set(input.joining_date),
            skillset: Set(input.skillset.clone()),
            username: Set(input.username.clone()),
            password_hash: Set(password_hash.to_string()),
            status: Set(input.status.unwrap_or(EmployeeStatus::Active)),
            role: Set(input.role.unwrap_or(EmployeeRole::Employee)),
            profile_image: Set(None),
            created_by: Set(Some(
                input
                    .created_by
                    .clone()
                    .unwrap_or_else(|| "Self".to_string()),
            )),
            modified_by: Set(None),
            created_at: Set(now),
            modified_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(db).await.map_err(|e| {
            if e.to_string().contains("duplicate key") || e.to_string().contains("unique") {
                AppError::Conflict("Username already exists".to_string())
            } else {
                AppError::Database(e.to_string())
            }
        })?;

        Ok(result.into())
    }

    /// Find employee by username (for login)
    pub async fn find_by_username(db: &DatabaseConnection, username: &str) -> AppResult<Employee> {
        let model = EmployeeEntity::find()
            .filter(Column::Username.eq(username))
            .one(db)
            .await?
            .ok_or_else(|| AppError::NotFound("Employee".to_string()))?;

        Ok(model.into())
    }

    /// Check if username is taken
    pub async fn username_exists(db: &DatabaseConnection, username: &str) -> AppResult<bool> {
        let count = EmployeeEntity::find()
            .filter(Column::Username.eq(username))
            .count(db)
            .await?;

        Ok(count > 0)
    }

    /// Write the full merged row and return the affected-row count.
    ///
    /// Every updatable column is written from the given record; callers are
    /// expected to have merged partial input into the current row first.
    /// Identity columns (id, username, password, role) and creation audit
    /// fields are never touched here.
    pub async fn save(db: &DatabaseConnection, employee: &Employee) -> AppResult<u64> {
        let result = EmployeeEntity::update_many()
            .set(ActiveModel {
                name: Set(employee.name.clone()),
                designation: Set(employee.designation.clone()),
                address: Set(employee.address.clone()),
                department: Set(employee.department.clone()),
                joining_date: Set(employee.joining_date),
                skillset: Set(employee.skillset.clone()),
                status: Set(employee.status),
                modified_by: Set(employee.modified_by.clone()),
                modified_at: Set(employee.modified_at),
                ..Default::default()
            })
            .filter(Column::EmployeeId.eq(employee.employee_id))
            .exec(db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Set the profile image reference path, independent of the merge path
    pub async fn set_profile_image(
        db: &DatabaseConnection,
        id: i32,
        path: &str,
    ) -> AppResult<()> {
        let result = EmployeeEntity::update_many()
            .set(ActiveModel {
                profile_image: Set(Some(path.to_string())),
                ..Default::default()
            })
            .filter(Column::EmployeeId.eq(id))
            .exec(db)
            .await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound("Employee".to_string()));
        }

        Ok(())
    }
}

// Conversion from SeaORM model to our domain model
impl From<employee::Model> for Employee {
    fn from(m: employee::Model) -> Self {
        Self {
            employee_id: m.employee_id,
            name: m.name,
            designation: m.designation,
            address: m.address,
            department: m.department,
            joining_date: m.joining_date,
            skillset: m.skillset,
            username: m.username,
            password_hash: m.password_hash,
            status: m.status,
            role: m.role,
            profile_image: m.profile_image,
            created_by: m.created_by,
            modified_by: m.modified_by,
            created_at: m.created_at,
            modified_at: m.modified_at,
        }
    }
}
