//! `service` crate — business rules on top of the employee repository.

pub mod error;
pub mod employee_service;

pub use error::ServiceError;
pub use employee_service::EmployeeService;
