//! Service-level error types.

use thiserror::Error;

use db::DbError;

/// Errors produced by [`crate::EmployeeService`].
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Another employee already uses this email.
    #[error("an employee with email '{email}' already exists")]
    DuplicateEmail { email: String },

    /// No employee exists under this id.
    #[error("employee {id} not found")]
    NotFound { id: i64 },

    /// An update was requested for an employee that was never saved.
    #[error("employee has no id; save it before updating")]
    MissingId,

    /// Persistence error from the db crate.
    #[error("database error: {0}")]
    Database(DbError),
}

impl From<DbError> for ServiceError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::DuplicateEmail(email) => Self::DuplicateEmail { email },
            DbError::NotFound(id) => Self::NotFound { id },
            other => Self::Database(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_conflicts_become_business_errors() {
        let err = ServiceError::from(DbError::DuplicateEmail("a@b.c".into()));
        assert!(matches!(err, ServiceError::DuplicateEmail { ref email } if email == "a@b.c"));

        let err = ServiceError::from(DbError::NotFound(3));
        assert!(matches!(err, ServiceError::NotFound { id: 3 }));
    }

    #[test]
    fn other_storage_errors_pass_through() {
        let err = ServiceError::from(DbError::Sqlx(sqlx_row_not_found()));
        assert!(matches!(err, ServiceError::Database(DbError::Sqlx(_))));
    }

    fn sqlx_row_not_found() -> db::sqlx::Error {
        db::sqlx::Error::RowNotFound
    }
}
