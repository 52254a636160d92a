//! Employee repository contract and its implementations.
//!
//! Every method returns a `Result<T, DbError>`. No business logic lives
//! here; email uniqueness is only enforced the way a storage constraint
//! would enforce it.

pub mod employees;
pub mod memory;

use async_trait::async_trait;

use crate::{models::Employee, DbError};

pub use employees::PgEmployeeRepository;
pub use memory::InMemoryEmployeeRepository;

/// Persistence access for [`Employee`] records.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Insert `employee` when it has no id, otherwise overwrite the row with
    /// that id. Returns the stored state, id included.
    ///
    /// Fails with [`DbError::NotFound`] when the id has no row and with
    /// [`DbError::DuplicateEmail`] when another row already holds the email.
    async fn save(&self, employee: Employee) -> Result<Employee, DbError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, DbError>;

    /// All records in id order; empty when there are none.
    async fn find_all(&self) -> Result<Vec<Employee>, DbError>;

    /// Remove the record with `id`. Deleting an unknown id is not an error.
    async fn delete_by_id(&self, id: i64) -> Result<(), DbError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, DbError>;
}
