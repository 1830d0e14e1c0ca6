//! Order Models

use jiff::Timestamp;

use crate::{auth::models::UserUuid, domain::products::models::ProductUuid, uuids::TypedUuid};

/// Order UUID
pub type OrderUuid = TypedUuid<Order>;

/// Order Model
///
/// A permanent receipt. Items and `total_amount` are frozen at checkout and
/// never change afterwards, whatever happens to the catalog or the cart.
#[derive(Debug, Clone)]
pub struct Order {
    pub uuid: OrderUuid,
    pub owner_uuid: UserUuid,
    pub total_amount: u64,
    pub items: Vec<OrderItem>,
    pub created_at: Timestamp,
}

/// Order Item UUID
pub type OrderItemUuid = TypedUuid<OrderItem>;

/// OrderItem Model
#[derive(Debug, Clone)]
pub struct OrderItem {
    pub uuid: OrderItemUuid,
    pub product_uuid: ProductUuid,
    pub name: String,
    pub price: u64,
    pub quantity: u64,
}
