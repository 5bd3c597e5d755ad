use std::collections::HashMap;
use std::sync::RwLock;

use barkeep_core::RepositoryError;
use barkeep_products::{Product, ProductId, ProductRepository};

/// In-memory, mapping-backed product store.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    products: RwLock<HashMap<ProductId, Product>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProductRepository for InMemoryProductRepository {
    fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let products = self
            .products
            .read()
            .map_err(|_| RepositoryError::storage("lock poisoned"))?;

        Ok(products.values().cloned().collect())
    }

    fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError> {
        let products = self
            .products
            .read()
            .map_err(|_| RepositoryError::storage("lock poisoned"))?;

        products.get(&id).cloned().ok_or(RepositoryError::NotFound)
    }

    fn add(&self, product: Product) -> Result<(), RepositoryError> {
        // Hold the write lock across the full check-then-insert sequence.
        let mut products = self
            .products
            .write()
            .map_err(|_| RepositoryError::storage("lock poisoned"))?;

        let id = product.id_typed();
        if products.contains_key(&id) {
            return Err(RepositoryError::already_exists(format!(
                "product {id} already exists"
            )));
        }
        products.insert(id, product);
        Ok(())
    }

    fn update(&self, product: Product) -> Result<(), RepositoryError> {
        let mut products = self
            .products
            .write()
            .map_err(|_| RepositoryError::storage("lock poisoned"))?;

        let id = product.id_typed();
        if !products.contains_key(&id) {
            return Err(RepositoryError::NotFound);
        }
        products.insert(id, product);
        Ok(())
    }

    fn delete(&self, id: ProductId) -> Result<(), RepositoryError> {
        let mut products = self
            .products
            .write()
            .map_err(|_| RepositoryError::storage("lock poisoned"))?;

        if products.remove(&id).is_none() {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
