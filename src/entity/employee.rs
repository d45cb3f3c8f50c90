use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub employee_id: i32,
    pub name: String,
    pub designation: Option<String>,
    pub address: Option<String>,
    pub department: Option<String>,
    pub joining_date: Option<TimeDate>,
    pub skillset: Option<String>,
    #[sea_orm(unique)]
    pub username: String,
    pub password_hash: String,
    pub status: EmployeeStatus,
    pub role: EmployeeRole,
    pub profile_image: Option<String>,
    pub created_by: Option<String>,
    pub modified_by: Option<String>,
    pub created_at: TimeDateTimeWithTimeZone,
    pub modified_at: TimeDateTimeWithTimeZone,
}

/// Account status, stored as its display string
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum EmployeeStatus {
    #[sea_orm(string_value = "Active")]
    Active,
    #[sea_orm(string_value = "Inactive")]
    Inactive,
}

impl EmployeeStatus {
    /// The other of the two states
    pub fn toggled(self) -> Self {
        match self {
            EmployeeStatus::Active => EmployeeStatus::Inactive,
            EmployeeStatus::Inactive => EmployeeStatus::Active,
        }
    }
}

#[derive(
    Copy, Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(50))")]
pub enum EmployeeRole {
    #[sea_orm(string_value = "Employee")]
    Employee,
    #[sea_orm(string_value = "Admin")]
    Admin,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
