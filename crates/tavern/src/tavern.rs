use rust_decimal::Decimal;

use barkeep_customers::CustomerId;
use barkeep_orders::{OrderError, OrderService};
use barkeep_products::ProductId;

/// A single unit of façade composition, same fail-fast shape as the order
/// service's configuration steps.
pub type TavernConfiguration = Box<dyn FnOnce(&mut TavernParts) -> Result<(), OrderError>>;

/// Mutable assembly state that configuration steps write into.
#[derive(Default)]
pub struct TavernParts {
    orders: Option<OrderService>,
}

/// Front-of-house façade: one coarse operation, place an order.
pub struct Tavern {
    orders: OrderService,
}

impl std::fmt::Debug for Tavern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tavern").finish_non_exhaustive()
    }
}

impl Tavern {
    /// Build a tavern from an ordered list of configuration steps.
    ///
    /// The first failing step aborts construction; a tavern without an
    /// order service is a configuration error.
    pub fn new(configurations: Vec<TavernConfiguration>) -> Result<Self, OrderError> {
        let mut parts = TavernParts::default();
        for configuration in configurations {
            configuration(&mut parts)?;
        }

        let orders = parts
            .orders
            .ok_or_else(|| OrderError::configuration("no order service configured"))?;

        Ok(Self { orders })
    }

    /// Place an order for a customer and return the total price.
    ///
    /// Delegates to the order service; any failure there aborts the whole
    /// order.
    pub fn order(
        &self,
        customer_id: CustomerId,
        product_ids: &[ProductId],
    ) -> Result<Decimal, OrderError> {
        let total = self.orders.create_order(customer_id, product_ids)?;
        tracing::info!(customer_id = %customer_id, total = %total, "order served");
        Ok(total)
    }
}

/// Attach the order service the tavern delegates to.
pub fn with_order_service(service: OrderService) -> TavernConfiguration {
    Box::new(move |parts| {
        parts.orders = Some(service);
        Ok(())
    })
}
