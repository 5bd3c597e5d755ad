//! Product repository contract.

use std::sync::Arc;

use barkeep_core::RepositoryError;

use crate::product::{Product, ProductId};

/// Storage contract for products.
///
/// All mutating operations on one repository instance must be atomic with
/// respect to each other: a single mutual-exclusion domain covers every
/// check-then-write sequence, so concurrent adds with the same id yield
/// exactly one success.
pub trait ProductRepository: Send + Sync {
    /// Return every stored product. Order is not significant.
    ///
    /// The in-memory implementation never fails here; a durable backend
    /// could, which is why the signature carries a `Result`.
    fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;

    /// Find a product by id. Fails with `NotFound` if absent.
    fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError>;

    /// Insert a new product. Fails with `AlreadyExists` if the id is taken.
    fn add(&self, product: Product) -> Result<(), RepositoryError>;

    /// Replace the stored data for an existing product.
    /// Fails with `NotFound` if absent.
    fn update(&self, product: Product) -> Result<(), RepositoryError>;

    /// Remove a product. Fails with `NotFound` if absent.
    fn delete(&self, id: ProductId) -> Result<(), RepositoryError>;
}

impl<R> ProductRepository for Arc<R>
where
    R: ProductRepository + ?Sized,
{
    fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        (**self).get_all()
    }

    fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError> {
        (**self).get_by_id(id)
    }

    fn add(&self, product: Product) -> Result<(), RepositoryError> {
        (**self).add(product)
    }

    fn update(&self, product: Product) -> Result<(), RepositoryError> {
        (**self).update(product)
    }

    fn delete(&self, id: ProductId) -> Result<(), RepositoryError> {
        (**self).delete(id)
    }
}
