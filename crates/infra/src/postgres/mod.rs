//! Postgres-backed repository implementations (sqlx).

mod customers;

pub use customers::PostgresCustomerRepository;
