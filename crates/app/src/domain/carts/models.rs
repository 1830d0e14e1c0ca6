//! Cart Models

use jiff::Timestamp;

use crate::{auth::models::UserUuid, domain::products::models::ProductUuid, uuids::TypedUuid};

/// Cart UUID
pub type CartUuid = TypedUuid<Cart>;

/// Cart Model
///
/// One cart per user, created lazily on the first add. `bill` always equals
/// the sum of `price * quantity` over the items after a committed mutation.
#[derive(Debug, Clone)]
pub struct Cart {
    pub uuid: CartUuid,
    pub owner_uuid: UserUuid,
    pub bill: u64,
    pub items: Vec<CartItem>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Cart Item UUID
pub type CartItemUuid = TypedUuid<CartItem>;

/// CartItem Model
///
/// `name` and `price` are snapshots taken when the item was added; later
/// catalog changes do not touch them.
#[derive(Debug, Clone)]
pub struct CartItem {
    pub uuid: CartItemUuid,
    pub product_uuid: ProductUuid,
    pub name: String,
    pub price: u64,
    pub quantity: u64,
    pub added_at: Timestamp,
}

/// New Cart Item Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewCartItem {
    pub uuid: CartItemUuid,
    pub product_uuid: ProductUuid,
    pub name: String,
    pub price: u64,
}
