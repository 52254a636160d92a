//! In-process employee store.
//!
//! Behaves like the `employees` table: ids come from a sequence starting at
//! 1 and never get reused, and the email column is unique. Handy for tests
//! and for running the server without Postgres.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::EmployeeRepository;
use crate::{models::Employee, DbError};

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<i64, Employee>,
    last_id: i64,
}

impl Table {
    fn email_taken(&self, email: &str, except: Option<i64>) -> bool {
        self.rows
            .values()
            .any(|row| row.email == email && row.id != except)
    }
}

/// [`EmployeeRepository`] held entirely in memory.
#[derive(Debug, Default)]
pub struct InMemoryEmployeeRepository {
    table: RwLock<Table>,
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn save(&self, mut employee: Employee) -> Result<Employee, DbError> {
        let mut table = self.table.write().await;

        if let Some(id) = employee.id {
            if !table.rows.contains_key(&id) {
                return Err(DbError::NotFound(id));
            }
        }
        if table.email_taken(&employee.email, employee.id) {
            return Err(DbError::DuplicateEmail(employee.email));
        }

        let id = match employee.id {
            Some(id) => id,
            None => {
                table.last_id += 1;
                table.last_id
            }
        };
        employee.id = Some(id);
        table.rows.insert(id, employee.clone());

        Ok(employee)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, DbError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Employee>, DbError> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), DbError> {
        self.table.write().await.rows.remove(&id);
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, DbError> {
        let table = self.table.read().await;
        Ok(table.rows.values().find(|row| row.email == email).cloned())
    }
}
