use std::sync::RwLock;

use distributor_parties::NewCustomer;

use super::{CustomerRepository, PersistenceError};

/// In-memory customer store for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryCustomerRepository {
    rows: RwLock<Vec<NewCustomer>>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of inserted customers, in insertion order.
    pub fn customers(&self) -> Vec<NewCustomer> {
        match self.rows.read() {
            Ok(rows) => rows.clone(),
            Err(_) => vec![],
        }
    }
}

#[async_trait::async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn insert(&self, customer: &NewCustomer) -> Result<(), PersistenceError> {
        let mut rows = self
            .rows
            .write()
            .map_err(|_| PersistenceError::Database("customer store lock poisoned".to_string()))?;
        rows.push(customer.clone());
        Ok(())
    }
}
