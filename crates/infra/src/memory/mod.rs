//! In-memory repository implementations.
//!
//! Intended for tests/dev. Every access takes the `RwLock`, reads included,
//! so concurrent adds and reads on the same instance cannot tear.

mod customers;
mod products;

pub use customers::InMemoryCustomerRepository;
pub use products::InMemoryProductRepository;
