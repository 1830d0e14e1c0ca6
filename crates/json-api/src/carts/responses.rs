//! Cart response envelopes.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::carts::models::{Cart, CartItem};

/// Envelope wrapping every successful cart response.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct CartEnvelope {
    /// Always `true`
    pub success: bool,

    /// What just happened to the cart
    pub message: String,

    /// The cart after the operation
    pub cart: CartResponse,
}

impl CartEnvelope {
    pub(crate) fn new(message: &str, cart: Cart) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            cart: cart.into(),
        }
    }
}

/// Cart Response
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct CartResponse {
    /// The unique identifier of the cart
    pub uuid: Uuid,

    /// The running total over all items, in minor currency units
    pub bill: u64,

    /// The items in the cart, newest first
    pub items: Vec<CartItemResponse>,

    /// The date and time the cart was created
    pub created_at: String,

    /// The date and time the cart was last updated
    pub updated_at: String,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        Self {
            uuid: cart.uuid.into_uuid(),
            bill: cart.bill,
            items: cart.items.into_iter().map(CartItemResponse::from).collect(),
            created_at: cart.created_at.to_string(),
            updated_at: cart.updated_at.to_string(),
        }
    }
}

/// Cart Item Response
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct CartItemResponse {
    /// The unique identifier of the product in this line
    pub product_uuid: Uuid,

    /// Product name as snapshotted when the line was added
    pub name: String,

    /// Unit price as snapshotted when the line was added
    pub price: u64,

    /// Units of the product in the cart
    pub quantity: u64,
}

impl From<CartItem> for CartItemResponse {
    fn from(item: CartItem) -> Self {
        Self {
            product_uuid: item.product_uuid.into_uuid(),
            name: item.name,
            price: item.price,
            quantity: item.quantity,
        }
    }
}
