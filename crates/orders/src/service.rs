use std::sync::Arc;

use rust_decimal::Decimal;

use barkeep_customers::{Customer, CustomerId, CustomerRepository};
use barkeep_infra::{InMemoryCustomerRepository, InMemoryProductRepository, PostgresCustomerRepository};
use barkeep_products::{Product, ProductId, ProductRepository};

use crate::error::OrderError;

/// A single unit of service composition. Steps are applied in order at
/// construction time; the first failure aborts the whole construction.
pub type OrderConfiguration = Box<dyn FnOnce(&mut OrderServiceParts) -> Result<(), OrderError>>;

/// Mutable assembly state that configuration steps write into.
#[derive(Default)]
pub struct OrderServiceParts {
    customers: Option<Arc<dyn CustomerRepository>>,
    products: Option<Arc<dyn ProductRepository>>,
}

/// Orchestrates customer and product lookups to price an order, and manages
/// customer onboarding. Repositories are attached through configuration
/// steps, so callers choose the backing stores.
pub struct OrderService {
    customers: Arc<dyn CustomerRepository>,
    products: Arc<dyn ProductRepository>,
}

impl std::fmt::Debug for OrderService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderService").finish_non_exhaustive()
    }
}

impl OrderService {
    /// Build a service from an ordered list of configuration steps.
    ///
    /// Fail-fast: the first step that errors aborts construction and that
    /// error is returned; no partial service escapes. A service with either
    /// repository still unattached after all steps is a configuration error.
    pub fn new(configurations: Vec<OrderConfiguration>) -> Result<Self, OrderError> {
        let mut parts = OrderServiceParts::default();
        for configuration in configurations {
            configuration(&mut parts)?;
        }

        let customers = parts
            .customers
            .ok_or_else(|| OrderError::configuration("no customer repository configured"))?;
        let products = parts
            .products
            .ok_or_else(|| OrderError::configuration("no product repository configured"))?;

        Ok(Self {
            customers,
            products,
        })
    }

    /// Register a new customer and return its identity.
    pub fn add_customer(&self, name: &str) -> Result<CustomerId, OrderError> {
        let customer = Customer::new(name)?;
        let id = customer.id_typed();
        self.customers.add(customer)?;
        Ok(id)
    }

    /// Price an order: resolve the customer, resolve each product in input
    /// order, and return the summed price.
    ///
    /// Fails with `NotFound` on an unknown customer (before any product
    /// lookup) or on the first unknown product id; no partial total is ever
    /// returned. Nothing is persisted — the transaction is only logged.
    pub fn create_order(
        &self,
        customer_id: CustomerId,
        product_ids: &[ProductId],
    ) -> Result<Decimal, OrderError> {
        let customer = self.customers.get(customer_id)?;

        let mut total = Decimal::ZERO;
        for product_id in product_ids {
            let product = self.products.get_by_id(*product_id)?;
            total += product.price();
        }

        tracing::info!(
            customer = %customer.name(),
            items = product_ids.len(),
            total = %total,
            "customer placed an order"
        );

        Ok(total)
    }
}

/// Attach an arbitrary caller-supplied customer repository (extension point).
pub fn with_customer_repository(repository: Arc<dyn CustomerRepository>) -> OrderConfiguration {
    Box::new(move |parts| {
        parts.customers = Some(repository);
        Ok(())
    })
}

/// Attach a fresh in-memory customer repository.
pub fn with_memory_customer_repository() -> OrderConfiguration {
    with_customer_repository(Arc::new(InMemoryCustomerRepository::new()))
}

/// Attach an in-memory product repository pre-seeded with `products`.
///
/// Seeding failures (e.g. duplicate ids in the seed list) abort construction.
pub fn with_memory_product_repository(products: Vec<Product>) -> OrderConfiguration {
    Box::new(move |parts| {
        let repository = InMemoryProductRepository::new();
        for product in products {
            repository.add(product)?;
        }
        parts.products = Some(Arc::new(repository));
        Ok(())
    })
}

/// Attach a postgres-backed customer repository reachable at
/// `connection_string`. Connection failures abort construction.
pub fn with_postgres_customer_repository(connection_string: &str) -> OrderConfiguration {
    let connection_string = connection_string.to_string();
    Box::new(move |parts| {
        let repository = PostgresCustomerRepository::connect(&connection_string)?;
        parts.customers = Some(Arc::new(repository));
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use barkeep_core::RepositoryError;
    use rust_decimal_macros::dec;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn seed_products() -> Vec<Product> {
        vec![
            Product::new("Beer", "Healthy Beverage", dec!(1.99)).unwrap(),
            Product::new("Peanuts", "Healthy Snacks", dec!(0.99)).unwrap(),
            Product::new("Wine", "Healthy Snacks", dec!(0.99)).unwrap(),
        ]
    }

    fn service_with(products: Vec<Product>) -> OrderService {
        OrderService::new(vec![
            with_memory_customer_repository(),
            with_memory_product_repository(products),
        ])
        .unwrap()
    }

    /// Product repository that counts lookups and never finds anything.
    #[derive(Default)]
    struct CountingProductRepository {
        lookups: AtomicUsize,
    }

    impl ProductRepository for CountingProductRepository {
        fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
            Ok(vec![])
        }

        fn get_by_id(&self, _id: ProductId) -> Result<Product, RepositoryError> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            Err(RepositoryError::NotFound)
        }

        fn add(&self, _product: Product) -> Result<(), RepositoryError> {
            Ok(())
        }

        fn update(&self, _product: Product) -> Result<(), RepositoryError> {
            Err(RepositoryError::NotFound)
        }

        fn delete(&self, _id: ProductId) -> Result<(), RepositoryError> {
            Err(RepositoryError::NotFound)
        }
    }

    #[test]
    fn new_fails_without_customer_repository() {
        let err = OrderService::new(vec![with_memory_product_repository(vec![])]).unwrap_err();
        assert!(matches!(err, OrderError::Configuration(_)));
    }

    #[test]
    fn new_fails_without_product_repository() {
        let err = OrderService::new(vec![with_memory_customer_repository()]).unwrap_err();
        assert!(matches!(err, OrderError::Configuration(_)));
    }

    #[test]
    fn new_propagates_seeding_failure() {
        let beer = Product::new("Beer", "Healthy Beverage", dec!(1.99)).unwrap();
        let err = OrderService::new(vec![
            with_memory_customer_repository(),
            with_memory_product_repository(vec![beer.clone(), beer]),
        ])
        .unwrap_err();

        assert!(matches!(
            err,
            OrderError::Repository(RepositoryError::AlreadyExists(_))
        ));
    }

    #[test]
    fn add_customer_returns_retrievable_identity() {
        let service = service_with(seed_products());

        let id = service.add_customer("Percy").unwrap();
        // The customer resolves during ordering, so it was persisted.
        let total = service.create_order(id, &[]).unwrap();
        assert_eq!(total, Decimal::ZERO);
    }

    #[test]
    fn add_customer_rejects_empty_name() {
        let service = service_with(seed_products());

        let err = service.add_customer("").unwrap_err();
        assert!(matches!(err, OrderError::Domain(_)));
    }

    #[test]
    fn create_order_sums_product_prices() {
        let products = seed_products();
        let beer = products[0].id_typed();
        let wine = products[2].id_typed();
        let service = service_with(products);
        let percy = service.add_customer("Percy").unwrap();

        assert_eq!(service.create_order(percy, &[beer]).unwrap(), dec!(1.99));
        assert_eq!(
            service.create_order(percy, &[beer, wine]).unwrap(),
            dec!(2.98)
        );
        // Input order does not change the total.
        assert_eq!(
            service.create_order(percy, &[wine, beer]).unwrap(),
            dec!(2.98)
        );
    }

    #[test]
    fn create_order_fails_on_unknown_product_without_partial_total() {
        let products = seed_products();
        let beer = products[0].id_typed();
        let service = service_with(products);
        let percy = service.add_customer("Percy").unwrap();

        let unknown = Product::new("Mead", "", dec!(3.50)).unwrap().id_typed();
        let err = service.create_order(percy, &[beer, unknown]).unwrap_err();
        assert!(matches!(
            err,
            OrderError::Repository(RepositoryError::NotFound)
        ));
    }

    #[test]
    fn create_order_fails_on_unknown_customer_before_any_product_lookup() {
        let counting = Arc::new(CountingProductRepository::default());
        let service = OrderService {
            customers: Arc::new(InMemoryCustomerRepository::new()),
            products: counting.clone(),
        };

        let ghost = Customer::new("Ghost").unwrap().id_typed();
        let beer = Product::new("Beer", "", dec!(1.99)).unwrap().id_typed();
        let err = service.create_order(ghost, &[beer]).unwrap_err();

        assert!(matches!(
            err,
            OrderError::Repository(RepositoryError::NotFound)
        ));
        assert_eq!(counting.lookups.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn later_configuration_steps_override_earlier_ones() {
        let first = Arc::new(InMemoryCustomerRepository::new());
        let second = Arc::new(InMemoryCustomerRepository::new());
        let service = OrderService::new(vec![
            with_customer_repository(first),
            with_customer_repository(second.clone()),
            with_memory_product_repository(vec![]),
        ])
        .unwrap();

        let id = service.add_customer("Percy").unwrap();
        assert_eq!(second.get(id).unwrap().name(), "Percy");
    }
}
