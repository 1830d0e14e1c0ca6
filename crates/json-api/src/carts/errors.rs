//! Errors

use tracing::error;

use storefront_app::domain::carts::CartsServiceError;

use crate::errors::ApiError;

pub(crate) fn into_api_error(error: CartsServiceError) -> ApiError {
    match error {
        CartsServiceError::CartNotFound => ApiError::not_found("Cart not found"),
        CartsServiceError::ItemNotFound => ApiError::not_found("Product not found in cart"),
        CartsServiceError::ProductNotFound => ApiError::not_found("Product not found"),
        CartsServiceError::QuantityExceedsStock => {
            ApiError::bad_request("Exceeds available quantity")
        }
        CartsServiceError::InvalidQuantity => ApiError::bad_request("Invalid quantity value"),
        CartsServiceError::InvalidReference => ApiError::bad_request("Invalid productId"),
        CartsServiceError::Sql(source) => {
            error!("cart operation failed: {source}");

            ApiError::internal()
        }
    }
}
