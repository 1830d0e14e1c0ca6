//! Orders service errors.

use sqlx::Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrdersServiceError {
    #[error("no products found in cart")]
    EmptyCart,

    #[error("product not found: {name}")]
    ProductNotFound { name: String },

    #[error("insufficient stock for product: {name}")]
    InsufficientStock { name: String },

    #[error("order not found")]
    NotFound,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for OrdersServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        Self::Sql(error)
    }
}
