//! Carts service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CartsServiceError {
    #[error("cart not found")]
    CartNotFound,

    #[error("product not found in cart")]
    ItemNotFound,

    #[error("product not found")]
    ProductNotFound,

    #[error("quantity exceeds available stock")]
    QuantityExceedsStock,

    #[error("invalid quantity value")]
    InvalidQuantity,

    #[error("related resource not found")]
    InvalidReference,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for CartsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::CartNotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::ForeignKeyViolation) => Self::InvalidReference,
            Some(ErrorKind::CheckViolation) => Self::InvalidQuantity,
            _ => Self::Sql(error),
        }
    }
}
