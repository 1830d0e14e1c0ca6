//! Cart Handlers

use salvo::Request;
use uuid::Uuid;

use storefront_app::domain::products::models::ProductUuid;

use crate::errors::ApiError;

pub(crate) mod add;
pub(crate) mod get;
pub(crate) mod remove;
pub(crate) mod update;

/// Pull the `{product}` path segment out of the request.
pub(crate) fn product_param(req: &Request) -> Result<ProductUuid, ApiError> {
    req.param::<Uuid>("product")
        .map(ProductUuid::from_uuid)
        .ok_or_else(|| ApiError::bad_request("Invalid productId"))
}
