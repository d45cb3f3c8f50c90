pub mod auth;
pub mod employee;

pub use auth::{login, register, AuthResponse, LoginRequest, RegisterRequest, RegisterResponse};
pub use employee::{
    delete_employee, get_employee, list_employees, update_employee, upload_profile_image,
    EmployeeListResponse, ModifiedByParams, ProfileImageResponse, UpdateEmployeeRequest,
    UpdateEmployeeResponse,
};
