//! Typed error type for the db crate.

use thiserror::Error;

/// Name of the unique constraint guarding `employees.email`.
pub const EMAIL_UNIQUE_CONSTRAINT: &str = "employees_email_key";

#[derive(Debug, Error)]
pub enum DbError {
    #[error("sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// An update targeted an id with no row behind it.
    #[error("employee {0} not found")]
    NotFound(i64),

    /// The write would leave two employees sharing one email.
    #[error("an employee with email '{0}' already exists")]
    DuplicateEmail(String),
}

impl DbError {
    /// Translate a failed write, turning a violation of the email unique
    /// constraint into [`DbError::DuplicateEmail`].
    pub(crate) fn from_write(err: sqlx::Error, email: &str) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            let on_email = db_err
                .constraint()
                .map_or(true, |name| name == EMAIL_UNIQUE_CONSTRAINT);
            if db_err.is_unique_violation() && on_email {
                return Self::DuplicateEmail(email.to_owned());
            }
        }
        Self::Sqlx(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_database_errors_pass_through() {
        let err = DbError::from_write(sqlx::Error::RowNotFound, "a@b.c");
        assert!(matches!(err, DbError::Sqlx(sqlx::Error::RowNotFound)));
    }

    #[test]
    fn messages_name_the_offending_value() {
        assert_eq!(DbError::NotFound(7).to_string(), "employee 7 not found");
        assert_eq!(
            DbError::DuplicateEmail("emily@hotmail.com".into()).to_string(),
            "an employee with email 'emily@hotmail.com' already exists"
        );
    }
}
