use std::collections::HashMap;
use std::sync::RwLock;

use barkeep_core::RepositoryError;
use barkeep_customers::{Customer, CustomerId, CustomerRepository};

/// In-memory, mapping-backed customer store.
#[derive(Debug, Default)]
pub struct InMemoryCustomerRepository {
    customers: RwLock<HashMap<CustomerId, Customer>>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CustomerRepository for InMemoryCustomerRepository {
    fn get(&self, id: CustomerId) -> Result<Customer, RepositoryError> {
        let customers = self
            .customers
            .read()
            .map_err(|_| RepositoryError::storage("lock poisoned"))?;

        customers.get(&id).cloned().ok_or(RepositoryError::NotFound)
    }

    fn add(&self, customer: Customer) -> Result<(), RepositoryError> {
        // Hold the write lock across the full check-then-insert sequence.
        let mut customers = self
            .customers
            .write()
            .map_err(|_| RepositoryError::storage("lock poisoned"))?;

        let id = customer.id_typed();
        if customers.contains_key(&id) {
            return Err(RepositoryError::already_exists(format!(
                "customer {id} already exists"
            )));
        }
        customers.insert(id, customer);
        Ok(())
    }

    fn update(&self, customer: Customer) -> Result<(), RepositoryError> {
        let mut customers = self
            .customers
            .write()
            .map_err(|_| RepositoryError::storage("lock poisoned"))?;

        let id = customer.id_typed();
        if !customers.contains_key(&id) {
            return Err(RepositoryError::NotFound);
        }
        customers.insert(id, customer);
        Ok(())
    }
}
