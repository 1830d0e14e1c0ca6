//! Order response envelopes.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::orders::models::{Order, OrderItem};

/// Envelope wrapping a single-order response.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct OrderEnvelope {
    /// Always `true`
    pub success: bool,

    /// What just happened
    pub message: String,

    /// The order
    pub order: OrderResponse,
}

impl OrderEnvelope {
    pub(crate) fn new(message: &str, order: Order) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            order: order.into(),
        }
    }
}

/// Envelope wrapping the order history response.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct OrderHistoryEnvelope {
    /// Always `true`
    pub success: bool,

    /// What just happened
    pub message: String,

    /// Orders, newest first
    pub orders: Vec<OrderResponse>,
}

impl OrderHistoryEnvelope {
    pub(crate) fn new(message: &str, orders: Vec<Order>) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            orders: orders.into_iter().map(OrderResponse::from).collect(),
        }
    }
}

/// Order Response
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct OrderResponse {
    /// The unique identifier of the order
    pub uuid: Uuid,

    /// Total charged at checkout, in minor currency units
    pub total_amount: u64,

    /// The purchased items, in cart order
    pub items: Vec<OrderItemResponse>,

    /// The date and time the order was placed
    pub created_at: String,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            uuid: order.uuid.into_uuid(),
            total_amount: order.total_amount,
            items: order.items.into_iter().map(OrderItemResponse::from).collect(),
            created_at: order.created_at.to_string(),
        }
    }
}

/// Order Item Response
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct OrderItemResponse {
    /// The unique identifier of the purchased product
    pub product_uuid: Uuid,

    /// Product name as charged
    pub name: String,

    /// Unit price as charged
    pub price: u64,

    /// Units purchased
    pub quantity: u64,
}

impl From<OrderItem> for OrderItemResponse {
    fn from(item: OrderItem) -> Self {
        Self {
            product_uuid: item.product_uuid.into_uuid(),
            name: item.name,
            price: item.price,
            quantity: item.quantity,
        }
    }
}
