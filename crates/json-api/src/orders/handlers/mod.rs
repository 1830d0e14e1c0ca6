//! Order Handlers

use salvo::Request;
use uuid::Uuid;

use storefront_app::domain::orders::models::OrderUuid;

use crate::errors::ApiError;

pub(crate) mod checkout;
pub(crate) mod get;
pub(crate) mod history;

/// Pull the `{order}` path segment out of the request.
pub(crate) fn order_param(req: &Request) -> Result<OrderUuid, ApiError> {
    req.param::<Uuid>("order")
        .map(OrderUuid::from_uuid)
        .ok_or_else(|| ApiError::bad_request("Invalid orderId"))
}
