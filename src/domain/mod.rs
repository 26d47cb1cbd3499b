//! Domain models for order tracking events.

mod money;
mod order;
mod plan;

pub use money::{gateway_fee_in_cents, price_in_cents, user_commission_in_cents};
pub use order::{Commission, Customer, OrderEvent, OrderStatus, Product, TrackingParameters};
pub use plan::Plan;
