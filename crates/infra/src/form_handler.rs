//! New-customer form submission.

use tracing::{error, info, instrument};

use distributor_parties::NewCustomer;

use crate::customers::{CustomerRepository, PersistenceError};

/// Turns one form submission into one customer insert.
///
/// Failures are logged and returned to the caller as-is; nothing is retried.
#[derive(Debug, Clone)]
pub struct CustomerFormHandler<R> {
    repository: R,
}

impl<R> CustomerFormHandler<R>
where
    R: CustomerRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Insert a customer from the four form fields.
    #[instrument(skip_all)]
    pub async fn submit(
        &self,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
    ) -> Result<(), PersistenceError> {
        let customer = NewCustomer::new(name, email, phone, address);
        self.submit_customer(&customer).await
    }

    #[instrument(skip_all)]
    pub async fn submit_customer(&self, customer: &NewCustomer) -> Result<(), PersistenceError> {
        match self.repository.insert(customer).await {
            Ok(()) => {
                info!("customer added");
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "customer insert failed");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::customers::InMemoryCustomerRepository;

    /// Repository that rejects every insert and counts attempts.
    #[derive(Default)]
    struct RejectingRepository {
        attempts: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl CustomerRepository for RejectingRepository {
        async fn insert(&self, _customer: &NewCustomer) -> Result<(), PersistenceError> {
            self.attempts.fetch_add(1, Ordering::SeqCst);
            Err(PersistenceError::Constraint("duplicate email".to_string()))
        }
    }

    #[tokio::test]
    async fn submit_inserts_all_four_fields() {
        distributor_observability::init();
        let handler = CustomerFormHandler::new(InMemoryCustomerRepository::new());

        handler
            .submit("Ada Lovelace", "ada@example.com", "555-0100", "12 Analytical Way")
            .await
            .unwrap();

        assert_eq!(
            handler.repository().customers(),
            vec![NewCustomer::new(
                "Ada Lovelace",
                "ada@example.com",
                "555-0100",
                "12 Analytical Way"
            )]
        );
    }

    #[tokio::test]
    async fn each_submission_is_one_row() {
        let repo = Arc::new(InMemoryCustomerRepository::new());
        let handler = CustomerFormHandler::new(repo.clone());

        handler.submit("A", "a@example.com", "1", "x").await.unwrap();
        handler.submit("A", "a@example.com", "1", "x").await.unwrap();

        assert_eq!(repo.customers().len(), 2);
    }

    #[tokio::test]
    async fn failures_surface_once_without_retry() {
        let repo = Arc::new(RejectingRepository::default());
        let handler = CustomerFormHandler::new(repo.clone());

        let err = handler
            .submit("Ada", "ada@example.com", "555-0100", "1 Main St")
            .await
            .unwrap_err();

        assert_eq!(err, PersistenceError::Constraint("duplicate email".to_string()));
        assert_eq!(repo.attempts.load(Ordering::SeqCst), 1);
    }
}
