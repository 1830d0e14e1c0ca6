//! Get Cart Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    carts::{errors::into_api_error, responses::CartEnvelope},
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Return the caller's cart.
#[salvo::handler]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CartEnvelope>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    let cart = state
        .app
        .carts
        .get_cart(user)
        .await
        .map_err(into_api_error)?;

    Ok(Json(CartEnvelope::new("Cart fetched successfully", cart)))
}
