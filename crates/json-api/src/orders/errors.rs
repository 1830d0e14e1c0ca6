//! Errors

use tracing::error;

use storefront_app::domain::orders::OrdersServiceError;

use crate::errors::ApiError;

pub(crate) fn into_api_error(error: OrdersServiceError) -> ApiError {
    match error {
        OrdersServiceError::EmptyCart => ApiError::bad_request("No products found in cart"),
        OrdersServiceError::ProductNotFound { name } => {
            ApiError::not_found(format!("Product not found: {name}"))
        }
        OrdersServiceError::InsufficientStock { name } => {
            ApiError::bad_request(format!("Insufficient quantity for product: {name}"))
        }
        OrdersServiceError::NotFound => ApiError::not_found("Order not found"),
        OrdersServiceError::Sql(source) => {
            error!("order operation failed: {source}");

            ApiError::internal()
        }
    }
}
