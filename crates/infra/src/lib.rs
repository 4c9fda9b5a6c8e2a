//! Infrastructure layer: database configuration and the customer insert flow.

pub mod config;
pub mod customers;
pub mod form_handler;

pub use config::{ConfigError, DatabaseConfig};
pub use customers::{
    CustomerRepository, InMemoryCustomerRepository, PersistenceError, PostgresCustomerRepository,
};
pub use form_handler::CustomerFormHandler;
