//! Request handlers.

pub mod employees;

use service::EmployeeService;

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub employees: EmployeeService,
}

impl AppState {
    pub fn new(employees: EmployeeService) -> Self {
        Self { employees }
    }
}
