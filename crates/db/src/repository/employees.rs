//! PostgreSQL-backed employee repository.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use super::EmployeeRepository;
use crate::{models::Employee, DbError};

/// [`EmployeeRepository`] over the `employees` table.
#[derive(Debug, Clone)]
pub struct PgEmployeeRepository {
    pool: PgPool,
}

impl PgEmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn insert(&self, employee: &Employee) -> Result<Employee, DbError> {
        sqlx::query_as::<_, Employee>(
            r#"
            INSERT INTO employees (first_name, last_name, email)
            VALUES ($1, $2, $3)
            RETURNING id, first_name, last_name, email
            "#,
        )
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(&employee.email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DbError::from_write(e, &employee.email))
    }

    async fn update(&self, id: i64, employee: &Employee) -> Result<Employee, DbError> {
        sqlx::query_as::<_, Employee>(
            r#"
            UPDATE employees
            SET first_name = $1, last_name = $2, email = $3
            WHERE id = $4
            RETURNING id, first_name, last_name, email
            "#,
        )
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(&employee.email)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DbError::from_write(e, &employee.email))?
        .ok_or(DbError::NotFound(id))
    }
}

#[async_trait]
impl EmployeeRepository for PgEmployeeRepository {
    async fn save(&self, employee: Employee) -> Result<Employee, DbError> {
        match employee.id {
            None => self.insert(&employee).await,
            Some(id) => self.update(id, &employee).await,
        }
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, DbError> {
        let row = sqlx::query_as::<_, Employee>(
            r#"SELECT id, first_name, last_name, email FROM employees WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn find_all(&self) -> Result<Vec<Employee>, DbError> {
        let rows = sqlx::query_as::<_, Employee>(
            r#"SELECT id, first_name, last_name, email FROM employees ORDER BY id ASC"#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            debug!(id, "delete matched no employee");
        }

        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, DbError> {
        let row = sqlx::query_as::<_, Employee>(
            r#"SELECT id, first_name, last_name, email FROM employees WHERE email = $1"#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }
}
