//! `barkeep-orders` — the order service: prices orders by chaining the
//! customer and product repositories, and onboards new customers.

pub mod error;
pub mod service;

pub use error::OrderError;
pub use service::{
    with_customer_repository, with_memory_customer_repository, with_memory_product_repository,
    with_postgres_customer_repository, OrderConfiguration, OrderService, OrderServiceParts,
};
