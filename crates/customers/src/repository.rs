//! Customer repository contract.

use std::sync::Arc;

use barkeep_core::RepositoryError;

use crate::customer::{Customer, CustomerId};

/// Storage contract for customers.
///
/// ## Design principles
///
/// - **No storage assumptions**: works for in-memory implementations
///   (tests/dev) and external persistent backends alike.
/// - **Atomic mutations**: `add` must hold one exclusive lock (or equivalent
///   storage-level guarantee) across its full check-then-insert sequence, so
///   concurrent adds with the same id yield exactly one success.
/// - **No partial state**: a failed call leaves the store unchanged.
pub trait CustomerRepository: Send + Sync {
    /// Find a customer by id. Fails with `NotFound` if absent.
    fn get(&self, id: CustomerId) -> Result<Customer, RepositoryError>;

    /// Insert a new customer. Fails with `AlreadyExists` if the id is taken.
    fn add(&self, customer: Customer) -> Result<(), RepositoryError>;

    /// Replace the stored data for an existing customer.
    /// Fails with `NotFound` if absent.
    fn update(&self, customer: Customer) -> Result<(), RepositoryError>;
}

impl<R> CustomerRepository for Arc<R>
where
    R: CustomerRepository + ?Sized,
{
    fn get(&self, id: CustomerId) -> Result<Customer, RepositoryError> {
        (**self).get(id)
    }

    fn add(&self, customer: Customer) -> Result<(), RepositoryError> {
        (**self).add(customer)
    }

    fn update(&self, customer: Customer) -> Result<(), RepositoryError> {
        (**self).update(customer)
    }
}
