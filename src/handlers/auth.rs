use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use time::Date;
use utoipa::ToSchema;

use crate::error::AppResult;
use crate::models::{CreateEmployee, EmployeeRole, EmployeeStatus, LoginEmployee};
use crate::services::{AuthService, EmployeeService};
use crate::state::AppState;

// ============ Request/Response DTOs ============

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub name: String,
    pub username: String,
    pub password: String,
    pub designation: Option<String>,
    pub address: Option<String>,
    pub department: Option<String>,
    #[schema(value_type = Option<String>)]
    pub joining_date: Option<Date>,
    pub skillset: Option<String>,
    pub role: Option<EmployeeRole>,
    pub status: Option<EmployeeStatus>,
    pub created_by: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RegisterResponse {
    pub employee_id: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    pub token: String,
    pub employee: LoginEmployee,
}

// ============ Handlers ============

/// Register a new employee account
#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Employee registered successfully", body = RegisterResponse),
        (status = 409, description = "Username already exists"),
        (status = 400, description = "Validation error")
    ),
    tag = "Auth"
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> AppResult<Json<RegisterResponse>> {
    let input = CreateEmployee {
        name: payload.name,
        username: payload.username,
        password: payload.password,
        designation: payload.designation,
        address: payload.address,
        department: payload.department,
        joining_date: payload.joining_date,
        skillset: payload.skillset,
        role: payload.role,
        status: payload.status,
        created_by: payload.created_by,
    };

    let employee = EmployeeService::register(&state.db, input).await?;

    Ok(Json(RegisterResponse {
        employee_id: employee.employee_id,
    }))
}

/// Login with username and password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = AuthResponse),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "Auth"
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let employee = EmployeeService::authenticate(&state.db, &payload.username, &payload.password)
        .await?;

    let token = AuthService::generate_token(
        employee.employee_id,
        &employee.username,
        employee.role,
        &state.config,
    )?;

    Ok(Json(AuthResponse {
        token,
        employee: employee.into(),
    }))
}
