//! Product Models

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// Product UUID
pub type ProductUuid = TypedUuid<Product>;

/// Product Model
#[derive(Debug, Clone)]
pub struct Product {
    pub uuid: ProductUuid,
    pub name: String,
    pub price: u64,
    pub stock: u64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// New Product Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub uuid: ProductUuid,
    pub name: String,
    pub price: u64,
    pub stock: u64,
}
