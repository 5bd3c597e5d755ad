//! Demo binary: seeds a product inventory, registers a customer, and places
//! an order through the tavern façade.

use anyhow::Result;
use rust_decimal_macros::dec;

use barkeep_orders::{
    with_memory_customer_repository, with_memory_product_repository, OrderService,
};
use barkeep_products::Product;
use barkeep_tavern::{with_order_service, Tavern};

fn main() -> Result<()> {
    barkeep_observability::init();

    let products = product_inventory()?;
    let peanuts = products[1].id_typed();

    let service = OrderService::new(vec![
        with_memory_customer_repository(),
        with_memory_product_repository(products),
    ])?;
    let percy = service.add_customer("Percy")?;

    let tavern = Tavern::new(vec![with_order_service(service)])?;
    let total = tavern.order(percy, &[peanuts])?;
    tracing::info!(%total, "demo order complete");

    Ok(())
}

fn product_inventory() -> Result<Vec<Product>> {
    Ok(vec![
        Product::new("Beer", "Healthy Beverage", dec!(1.99))?,
        Product::new("Peanuts", "Healthy Snacks", dec!(0.99))?,
        Product::new("Wine", "Healthy Snacks", dec!(0.99))?,
    ])
}
