//! `db` crate — pure persistence layer.
//!
//! Provides the [`Employee`] record, the [`EmployeeRepository`] contract with
//! a Postgres and an in-memory implementation, and pool/migration helpers.
//! No business logic lives here.

pub mod error;
pub mod pool;
pub mod repository;
pub mod models;

pub use sqlx;
pub use pool::{DbPool, PoolConfig};
pub use error::DbError;
pub use models::{Employee, EmployeeBuilder};
pub use repository::{EmployeeRepository, InMemoryEmployeeRepository, PgEmployeeRepository};

#[cfg(any(test, feature = "mock"))]
pub use repository::MockEmployeeRepository;
