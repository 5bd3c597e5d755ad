use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use barkeep_core::{DomainError, DomainResult, Entity, EntityId};

/// Product identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub EntityId);

impl ProductId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Entity: a product that can be ordered.
///
/// Immutable after construction; repository-level replace is the only way to
/// change a stored product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    description: String,
    /// Non-negative price. `Decimal` keeps sums exact (1.99 + 0.99 = 2.98)
    /// and has no non-finite values.
    price: Decimal,
}

impl Product {
    /// Create a new product with a fresh identity.
    ///
    /// The trimmed name must be non-empty and the price non-negative.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: Decimal,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("product name cannot be empty"));
        }
        if price.is_sign_negative() {
            return Err(DomainError::validation(format!(
                "product price cannot be negative: {price}"
            )));
        }

        Ok(Self {
            id: ProductId::new(EntityId::new()),
            name,
            description: description.into(),
            price,
        })
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> Decimal {
        self.price
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
