//! Get Order Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    errors::ApiError,
    extensions::*,
    orders::{errors::into_api_error, handlers::order_param, responses::OrderEnvelope},
    state::State,
};

/// Return one of the caller's orders.
#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<OrderEnvelope>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;
    let order = order_param(req)?;

    let order = state
        .app
        .orders
        .get_order(user, order)
        .await
        .map_err(into_api_error)?;

    Ok(Json(OrderEnvelope::new(
        "Order details retrieved successfully",
        order,
    )))
}
