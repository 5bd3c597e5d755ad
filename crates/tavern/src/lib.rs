//! `barkeep-tavern` — front-of-house façade over the order service.

pub mod tavern;

pub use tavern::{with_order_service, Tavern, TavernConfiguration, TavernParts};
