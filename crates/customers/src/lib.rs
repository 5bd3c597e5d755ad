//! `barkeep-customers` — customer entity and repository contract.

pub mod customer;
pub mod repository;

pub use customer::{Customer, CustomerId};
pub use repository::CustomerRepository;
