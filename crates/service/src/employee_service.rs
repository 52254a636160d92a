//! Employee service.
//!
//! `EmployeeService` wraps an [`EmployeeRepository`] and adds the one
//! business rule of the system: no two employees may share an email.
//!
//! The rule is checked before a write and is not atomic with it. Storage
//! that enforces a unique email (the Postgres schema and the in-memory
//! repository both do) reports the losing writer of a race as
//! `DbError::DuplicateEmail`, which surfaces here as
//! [`ServiceError::DuplicateEmail`] as well.

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use db::{Employee, EmployeeRepository};

use crate::ServiceError;

/// Cheaply clonable handle over a shared repository.
#[derive(Clone)]
pub struct EmployeeService {
    repository: Arc<dyn EmployeeRepository>,
}

impl EmployeeService {
    pub fn new(repository: Arc<dyn EmployeeRepository>) -> Self {
        Self { repository }
    }

    /// Create a new employee.
    ///
    /// # Errors
    /// [`ServiceError::DuplicateEmail`] if the email is already in use; the
    /// repository is not written to in that case.
    #[instrument(skip(self, employee), fields(email = %employee.email))]
    pub async fn save_employee(&self, employee: Employee) -> Result<Employee, ServiceError> {
        if self.repository.find_by_email(&employee.email).await?.is_some() {
            warn!("rejecting employee with duplicate email");
            return Err(ServiceError::DuplicateEmail {
                email: employee.email,
            });
        }

        let saved = self.repository.save(employee).await?;
        info!(id = ?saved.id, "employee created");
        Ok(saved)
    }

    pub async fn get_all_employees(&self) -> Result<Vec<Employee>, ServiceError> {
        Ok(self.repository.find_all().await?)
    }

    pub async fn get_employee_by_id(&self, id: i64) -> Result<Option<Employee>, ServiceError> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Overwrite an existing employee.
    ///
    /// Unlike creation, the email may stay the same: it only conflicts when
    /// a *different* employee already holds it.
    ///
    /// # Errors
    /// [`ServiceError::MissingId`] for an unsaved employee,
    /// [`ServiceError::DuplicateEmail`] when the email belongs to someone
    /// else and [`ServiceError::NotFound`] when no row has this id.
    #[instrument(skip(self, employee), fields(id = ?employee.id))]
    pub async fn update_employee(&self, employee: Employee) -> Result<Employee, ServiceError> {
        let id = employee.id.ok_or(ServiceError::MissingId)?;

        if let Some(holder) = self.repository.find_by_email(&employee.email).await? {
            if holder.id != Some(id) {
                warn!(holder = ?holder.id, "email already belongs to another employee");
                return Err(ServiceError::DuplicateEmail {
                    email: employee.email,
                });
            }
        }

        let updated = self.repository.save(employee).await?;
        info!("employee updated");
        Ok(updated)
    }

    /// Remove an employee. Unknown ids are ignored.
    #[instrument(skip(self))]
    pub async fn delete_employee(&self, id: i64) -> Result<(), ServiceError> {
        self.repository.delete_by_id(id).await?;
        debug!("employee deleted");
        Ok(())
    }
}
