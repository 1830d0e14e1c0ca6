//! Add Cart Item Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    carts::{errors::into_api_error, handlers::product_param, responses::CartEnvelope},
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Add one unit of a product to the caller's cart.
#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<CartEnvelope>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;
    let product = product_param(req)?;

    let cart = state
        .app
        .carts
        .add_item(user, product)
        .await
        .map_err(into_api_error)?;

    Ok(Json(CartEnvelope::new("Product added to cart", cart)))
}
