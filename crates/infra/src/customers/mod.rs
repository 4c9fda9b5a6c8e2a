//! Customer persistence boundary.
//!
//! The `customer` table contract is four text columns:
//!
//! ```sql
//! CREATE TABLE customer (
//!     name    TEXT NOT NULL,
//!     email   TEXT NOT NULL,
//!     phone   TEXT NOT NULL,
//!     address TEXT NOT NULL
//! );
//! ```

pub mod in_memory;
pub mod postgres;

use std::sync::Arc;

use thiserror::Error;

use distributor_parties::NewCustomer;

pub use in_memory::InMemoryCustomerRepository;
pub use postgres::PostgresCustomerRepository;

/// A customer write failed. Never retried by this crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// No connection could be obtained (bad URL, unreachable server, timeout,
    /// closed pool).
    #[error("database connection failed: {0}")]
    Connection(String),

    /// The row was rejected by a table constraint.
    #[error("constraint violation: {0}")]
    Constraint(String),

    /// Any other database failure.
    #[error("database error: {0}")]
    Database(String),
}

/// Write-side store for submitted customers.
#[async_trait::async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Insert one customer row.
    async fn insert(&self, customer: &NewCustomer) -> Result<(), PersistenceError>;
}

#[async_trait::async_trait]
impl<R> CustomerRepository for Arc<R>
where
    R: CustomerRepository + ?Sized,
{
    async fn insert(&self, customer: &NewCustomer) -> Result<(), PersistenceError> {
        (**self).insert(customer).await
    }
}
