use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};
use utoipa::ToSchema;

pub use crate::entity::employee::{EmployeeRole, EmployeeStatus};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub employee_id: i32,
    pub name: String,
    pub designation: Option<String>,
    pub address: Option<String>,
    pub department: Option<String>,
    pub joining_date: Option<Date>,
    pub skillset: Option<String>,
    pub username: String,
    #[serde(skip_serializing)] // Never expose password hash
    pub password_hash: String,
    pub status: EmployeeStatus,
    pub role: EmployeeRole,
    pub profile_image: Option<String>,
    pub created_by: Option<String>,
    pub modified_by: Option<String>,
    pub created_at: OffsetDateTime,
    pub modified_at: OffsetDateTime,
}

/// Employee creation DTO (without id and timestamps)
#[derive(Debug, Deserialize)]
pub struct CreateEmployee {
    pub name: String,
    pub username: String,
    pub password: String,
    pub designation: Option<String>,
    pub address: Option<String>,
    pub department: Option<String>,
    pub joining_date: Option<Date>,
    pub skillset: Option<String>,
    pub role: Option<EmployeeRole>,
    pub status: Option<EmployeeStatus>,
    pub created_by: Option<String>,
}

/// Partial update payload. `None` means "preserve the stored value";
/// only an Admin may carry `status`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UpdateEmployee {
    pub name: Option<String>,
    pub designation: Option<String>,
    pub address: Option<String>,
    pub department: Option<String>,
    pub joining_date: Option<Date>,
    pub skillset: Option<String>,
    pub status: Option<EmployeeStatus>,
}

/// Full employee projection (safe to return via API)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EmployeeResponse {
    pub employee_id: i32,
    pub name: String,
    pub designation: Option<String>,
    pub address: Option<String>,
    pub department: Option<String>,
    pub joining_date: Option<Date>,
    pub skillset: Option<String>,
    pub username: String,
    pub status: EmployeeStatus,
    pub role: EmployeeRole,
    pub profile_image: Option<String>,
    pub created_by: Option<String>,
    pub modified_by: Option<String>,
    #[schema(value_type = String)]
    pub created_at: OffsetDateTime,
    #[schema(value_type = String)]
    pub modified_at: OffsetDateTime,
}

impl From<Employee> for EmployeeResponse {
    fn from(e: Employee) -> Self {
        Self {
            employee_id: e.employee_id,
            name: e.name,
            designation: e.designation,
            address: e.address,
            department: e.department,
            joining_date: e.joining_date,
            skillset: e.skillset,
            username: e.username,
            status: e.status,
            role: e.role,
            profile_image: e.profile_image,
            created_by: e.created_by,
            modified_by: e.modified_by,
            created_at: e.created_at,
            modified_at: e.modified_at,
        }
    }
}

/// Reduced projection returned by login
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginEmployee {
    pub employee_id: i32,
    pub name: String,
    pub username: String,
    pub role: EmployeeRole,
    pub status: EmployeeStatus,
    pub profile_image: Option<String>,
}

impl From<Employee> for LoginEmployee {
    fn from(e: Employee) -> Self {
        Self {
            employee_id: e.employee_id,
            name: e.name,
            username: e.username,
            role: e.role,
            status: e.status,
            profile_image: e.profile_image,
        }
    }
}
