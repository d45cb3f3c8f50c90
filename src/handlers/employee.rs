use axum::{
    extract::{Multipart, Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use time::Date;
use utoipa::{IntoParams, ToSchema};

use crate::error::{AppError, AppResult};
use crate::middlewares::AuthUser;
use crate::models::{EmployeeResponse, EmployeeStatus, UpdateEmployee};
use crate::repositories::{EmployeeRepository, Repository};
use crate::services::{EmployeeService, StorageService};
use crate::state::AppState;

// ============ Request/Response DTOs ============

#[derive(Debug, Deserialize, IntoParams)]
pub struct ModifiedByParams {
    /// Name recorded as the author of the mutation
    pub modified_by: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateEmployeeRequest {
    pub name: Option<String>,
    pub designation: Option<String>,
    pub address: Option<String>,
    pub department: Option<String>,
    #[schema(value_type = Option<String>)]
    pub joining_date: Option<Date>,
    pub skillset: Option<String>,
    pub status: Option<EmployeeStatus>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EmployeeListResponse {
    pub data: Vec<EmployeeResponse>,
    pub total: u64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UpdateEmployeeResponse {
    pub updated: u64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileImageResponse {
    pub profile_image: String,
}

// ============ Handlers ============

/// List all employees
#[utoipa::path(
    get,
    path = "/api/employees",
    responses(
        (status = 200, description = "List of employees", body = EmployeeListResponse),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Employees"
)]
pub async fn list_employees(
    _user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<EmployeeListResponse>> {
    let employees = EmployeeService::get_all(&state.db).await?;
    let total = EmployeeRepository::count(&state.db).await?;

    Ok(Json(EmployeeListResponse {
        data: employees.into_iter().map(|e| e.into()).collect(),
        total,
    }))
}

/// Get an employee by ID
#[utoipa::path(
    get,
    path = "/api/employees/{id}",
    params(
        ("id" = i32, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee details", body = EmployeeResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Employee not found")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Employees"
)]
pub async fn get_employee(
    _user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<EmployeeResponse>> {
    let employee = EmployeeService::get(&state.db, id).await?;
    Ok(Json(employee.into()))
}

/// Apply a partial update to an employee record.
///
/// Fields absent from the body keep their stored values.
#[utoipa::path(
    put,
    path = "/api/employees/{id}",
    params(
        ("id" = i32, Path, description = "Employee ID"),
        ModifiedByParams
    ),
    request_body = UpdateEmployeeRequest,
    responses(
        (status = 200, description = "Employee updated successfully", body = UpdateEmployeeResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not allowed to change this record"),
        (status = 404, description = "Employee not found")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Employees"
)]
pub async fn update_employee(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(params): Query<ModifiedByParams>,
    Json(payload): Json<UpdateEmployeeRequest>,
) -> AppResult<Json<UpdateEmployeeResponse>> {
    let fields = UpdateEmployee {
        name: payload.name,
        designation: payload.designation,
        address: payload.address,
        department: payload.department,
        joining_date: payload.joining_date,
        skillset: payload.skillset,
        status: payload.status,
    };

    let updated = EmployeeService::update(&state.db, id, &fields, &user, params.modified_by).await?;

    Ok(Json(UpdateEmployeeResponse { updated }))
}

/// Delete an employee record (admin only)
#[utoipa::path(
    delete,
    path = "/api/employees/{id}",
    params(
        ("id" = i32, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee deleted successfully"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin access required"),
        (status = 404, description = "Employee not found")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Employees"
)]
pub async fn delete_employee(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<()> {
    EmployeeService::delete(&state.db, id, &user).await?;
    Ok(())
}

/// Upload a profile image for an employee.
///
/// Issued as the second registration step, before the account has a token;
/// a failure here leaves the created account intact.
#[utoipa::path(
    post,
    path = "/api/employees/{id}/image",
    params(
        ("id" = i32, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Image stored", body = ProfileImageResponse),
        (status = 400, description = "Missing or empty file field"),
        (status = 404, description = "Employee not found")
    ),
    tag = "Employees"
)]
pub async fn upload_profile_image(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    mut multipart: Multipart,
) -> AppResult<Json<ProfileImageResponse>> {
    // The account must exist before an image can be attached to it
    EmployeeService::get(&state.db, id).await?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart payload: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let original_name = field.file_name().unwrap_or("upload").to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Invalid multipart payload: {}", e)))?;

        let path =
            StorageService::save_profile_image(&state.config.upload_dir, &original_name, &data)
                .await?;
        EmployeeService::attach_profile_image(&state.db, id, &path).await?;

        return Ok(Json(ProfileImageResponse {
            profile_image: path,
        }));
    }

    Err(AppError::Validation(
        "No file field in upload".to_string(),
    ))
}
