use uuid::Uuid;

use staffdesk::models::{CreateEmployee, Employee, EmployeeRole};
use staffdesk::services::{AuthService, EmployeeService};
use staffdesk::state::AppState;

/// Password used for every factory-created account
pub const TEST_PASSWORD: &str = "TestPassword123!";

/// Authentication info for tests
#[allow(dead_code)]
pub struct TestAuth {
    pub employee_id: i32,
    pub username: String,
    pub token: String,
}

impl TestAuth {
    /// Get the Authorization header value
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

/// Factory for creating test data
pub struct Factory<'a> {
    state: &'a AppState,
}

#[allow(dead_code)]
impl<'a> Factory<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    async fn create_with_role(&self, role: EmployeeRole) -> (Employee, TestAuth) {
        let unique_id = Uuid::new_v4();
        let username = format!("user-{}", unique_id);

        let input = CreateEmployee {
            name: format!("Test Employee {}", unique_id),
            username: username.clone(),
            password: TEST_PASSWORD.to_string(),
            designation: Some("Tester".to_string()),
            address: None,
            department: Some("QA".to_string()),
            joining_date: None,
            skillset: Some("Testing".to_string()),
            role: Some(role),
            status: None,
            created_by: None,
        };

        let employee = EmployeeService::register(&self.state.db, input)
            .await
            .unwrap();

        let token = AuthService::generate_token(
            employee.employee_id,
            &employee.username,
            employee.role,
            &self.state.config,
        )
        .unwrap();

        let auth = TestAuth {
            employee_id: employee.employee_id,
            username,
            token,
        };

        (employee, auth)
    }

    /// Create a regular employee and return auth info
    pub async fn create_employee(&self) -> TestAuth {
        self.create_with_role(EmployeeRole::Employee).await.1
    }

    /// Create a regular employee and return the full record with auth info
    pub async fn create_employee_record(&self) -> (Employee, TestAuth) {
        self.create_with_role(EmployeeRole::Employee).await
    }

    /// Create an admin and return auth info
    pub async fn create_admin(&self) -> TestAuth {
        self.create_with_role(EmployeeRole::Admin).await.1
    }
}
