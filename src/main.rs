use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use staffdesk::config::Config;
use staffdesk::handlers::{
    AuthResponse, EmployeeListResponse, LoginRequest, ProfileImageResponse, RegisterRequest,
    RegisterResponse, UpdateEmployeeRequest, UpdateEmployeeResponse,
};
use staffdesk::models::{EmployeeResponse, EmployeeRole, EmployeeStatus, LoginEmployee};
use staffdesk::state::AppState;
use staffdesk::{build_router, handlers};

/// Security scheme for Bearer token
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::auth::register,
        handlers::auth::login,
        handlers::employee::list_employees,
        handlers::employee::get_employee,
        handlers::employee::update_employee,
        handlers::employee::delete_employee,
        handlers::employee::upload_profile_image,
    ),
    components(schemas(
        RegisterRequest,
        RegisterResponse,
        LoginRequest,
        AuthResponse,
        LoginEmployee,
        EmployeeResponse,
        EmployeeListResponse,
        UpdateEmployeeRequest,
        UpdateEmployeeResponse,
        ProfileImageResponse,
        EmployeeStatus,
        EmployeeRole,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Registration and login endpoints"),
        (name = "Employees", description = "Employee record management endpoints")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Load configuration
    let config = Config::from_env().expect("Failed to load configuration");
    let addr = config.server_addr();

    // Initialize application state (connects to the database)
    tracing::info!("Connecting to database...");
    let state = AppState::new(config)
        .await
        .expect("Failed to initialize application state");
    tracing::info!("Database connection established");

    // Build the main application router
    let app = build_router(state)
        // Add Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();

    tracing::info!("Server started on http://{}", addr);
    tracing::info!("Swagger UI: http://{}/swagger-ui/", addr);
    axum::serve(listener, app).await.unwrap();
}
