// Library crate for Staffdesk
// Exports modules for use by the server binary and tests

pub mod config;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod middlewares;
pub mod models;
pub mod repositories;
pub mod services;
pub mod state;
pub mod views;

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{
    delete_employee, get_employee, list_employees, login, register, update_employee,
    upload_profile_image,
};
use crate::middlewares::auth_middleware;
use crate::state::AppState;

/// Build the application router with the given state
pub fn build_router(state: AppState) -> Router {
    // Protected routes (require authentication)
    let protected_routes = Router::new()
        .route("/api/employees", get(list_employees))
        .route("/api/employees/{id}", get(get_employee))
        .route("/api/employees/{id}", put(update_employee))
        .route("/api/employees/{id}", delete(delete_employee))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .route("/", get(|| async { "Hello, Staffdesk!" }))
        // Public auth routes
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        // Image upload is the second registration step and happens before
        // the new account holds a token
        .route("/api/employees/{id}/image", post(upload_profile_image))
        // Protected routes
        .merge(protected_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
