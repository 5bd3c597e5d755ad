use std::future::Future;
use std::time::Duration;

use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use barkeep_core::{EntityId, RepositoryError};
use barkeep_customers::{Customer, CustomerId, CustomerRepository};

/// Upper bound for any single storage call. On expiry the underlying
/// operation is cancelled (dropped) and the call fails with `Timeout`.
const OP_TIMEOUT: Duration = Duration::from_secs(10);

/// Postgres-backed customer store.
///
/// Translates between the domain [`Customer`] and the `customers` table
/// (`id uuid primary key, name text`). The repository trait is synchronous,
/// so each operation bridges onto the ambient tokio runtime and bounds the
/// query with [`OP_TIMEOUT`].
#[derive(Debug)]
pub struct PostgresCustomerRepository {
    pool: PgPool,
}

/// Internal storage record, kept separate from the domain entity so the
/// table shape can drift without touching the domain type.
#[derive(Debug)]
struct CustomerRecord {
    id: Uuid,
    name: String,
}

impl CustomerRecord {
    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
        })
    }

    fn from_customer(customer: &Customer) -> Self {
        Self {
            id: (*customer.id_typed().0.as_uuid()),
            name: customer.name().to_string(),
        }
    }

    /// Rehydrate the domain entity, re-validating the stored name.
    fn into_customer(self) -> Result<Customer, RepositoryError> {
        let mut customer = Customer::new(self.name)
            .map_err(|e| RepositoryError::storage(format!("invalid stored customer: {e}")))?;
        customer.set_id(CustomerId::new(EntityId::from_uuid(self.id)));
        Ok(customer)
    }
}

impl PostgresCustomerRepository {
    /// Create a repository from a connection string.
    ///
    /// The pool connects lazily; an unreachable server surfaces as a
    /// `Storage` error on the first operation, a malformed connection string
    /// fails here.
    pub fn connect(connection_string: &str) -> Result<Self, RepositoryError> {
        let pool = PgPoolOptions::new()
            .connect_lazy(connection_string)
            .map_err(|e| RepositoryError::storage(format!("postgres connect: {e}")))?;
        Ok(Self { pool })
    }

    pub fn with_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Run a storage future to completion on the ambient runtime, bounded by
    /// [`OP_TIMEOUT`].
    fn run<F, T>(&self, fut: F) -> Result<T, RepositoryError>
    where
        F: Future<Output = Result<T, sqlx::Error>>,
    {
        let handle = tokio::runtime::Handle::try_current()
            .map_err(|_| RepositoryError::storage("no tokio runtime available"))?;

        match handle.block_on(tokio::time::timeout(OP_TIMEOUT, fut)) {
            Ok(result) => result.map_err(map_sqlx_error),
            Err(_elapsed) => Err(RepositoryError::Timeout(OP_TIMEOUT)),
        }
    }
}

fn map_sqlx_error(err: sqlx::Error) -> RepositoryError {
    match err {
        sqlx::Error::RowNotFound => RepositoryError::NotFound,
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            RepositoryError::already_exists("customer already exists")
        }
        other => RepositoryError::storage(other.to_string()),
    }
}

impl CustomerRepository for PostgresCustomerRepository {
    fn get(&self, id: CustomerId) -> Result<Customer, RepositoryError> {
        tracing::debug!(customer_id = %id, "loading customer from postgres");
        let row = self.run(
            sqlx::query("SELECT id, name FROM customers WHERE id = $1")
                .bind(*id.0.as_uuid())
                .fetch_one(&self.pool),
        )?;

        let record = CustomerRecord::from_row(&row).map_err(map_sqlx_error)?;
        record.into_customer()
    }

    fn add(&self, customer: Customer) -> Result<(), RepositoryError> {
        let record = CustomerRecord::from_customer(&customer);
        tracing::debug!(customer_id = %customer.id_typed(), "inserting customer into postgres");
        self.run(
            sqlx::query("INSERT INTO customers (id, name) VALUES ($1, $2)")
                .bind(record.id)
                .bind(record.name)
                .execute(&self.pool),
        )?;
        Ok(())
    }

    fn update(&self, _customer: Customer) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unsupported("postgres customer update"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connect_rejects_malformed_connection_string() {
        let err = PostgresCustomerRepository::connect("not a url").unwrap_err();
        assert!(matches!(err, RepositoryError::Storage(_)));
    }

    #[tokio::test]
    async fn update_is_unsupported() {
        let repo =
            PostgresCustomerRepository::connect("postgres://localhost:5432/barkeep").unwrap();
        let customer = Customer::new("Percy").unwrap();

        let err = repo.update(customer).unwrap_err();
        assert!(matches!(err, RepositoryError::Unsupported(_)));
    }

    #[test]
    fn operations_fail_without_a_runtime() {
        let repo =
            PostgresCustomerRepository::connect("postgres://localhost:5432/barkeep").unwrap();
        let customer = Customer::new("Percy").unwrap();

        let err = repo.get(customer.id_typed()).unwrap_err();
        assert!(matches!(err, RepositoryError::Storage(_)));
    }

    #[test]
    fn record_round_trips_to_customer() {
        let customer = Customer::new("Percy").unwrap();
        let record = CustomerRecord::from_customer(&customer);

        let rehydrated = record.into_customer().unwrap();
        assert_eq!(rehydrated, customer);
    }

    #[test]
    fn record_with_blank_name_fails_rehydration() {
        let record = CustomerRecord {
            id: Uuid::now_v7(),
            name: String::new(),
        };

        let err = record.into_customer().unwrap_err();
        assert!(matches!(err, RepositoryError::Storage(_)));
    }
}
