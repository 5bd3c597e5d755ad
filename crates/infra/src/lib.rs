//! Infrastructure layer: backing stores for the domain repositories.

pub mod memory;
pub mod postgres;

pub use memory::{InMemoryCustomerRepository, InMemoryProductRepository};
pub use postgres::PostgresCustomerRepository;
