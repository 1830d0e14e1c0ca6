//! Order History Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    errors::ApiError,
    extensions::*,
    orders::{errors::into_api_error, responses::OrderHistoryEnvelope},
    state::State,
};

/// Return the caller's orders, newest first.
#[salvo::handler]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<OrderHistoryEnvelope>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    let orders = state
        .app
        .orders
        .order_history(user)
        .await
        .map_err(into_api_error)?;

    Ok(Json(OrderHistoryEnvelope::new(
        "Order history retrieved successfully",
        orders,
    )))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use storefront_app::domain::orders::MockOrdersService;

    use crate::test_helpers::{TEST_USER_UUID, make_order, make_order_item, orders_service};

    use super::*;

    fn make_service(orders: MockOrdersService) -> Service {
        orders_service(orders, Router::with_path("orders/history").get(handler))
    }

    #[tokio::test]
    async fn test_history_returns_200_with_orders() -> TestResult {
        let newest = make_order(TEST_USER_UUID, vec![make_order_item("B", 5_00, 1)]);
        let oldest = make_order(TEST_USER_UUID, vec![make_order_item("A", 10_00, 2)]);
        let expected = vec![newest.uuid, oldest.uuid];

        let mut orders = MockOrdersService::new();

        orders
            .expect_order_history()
            .once()
            .withf(|user| *user == TEST_USER_UUID)
            .return_once(move |_| Ok(vec![newest, oldest]));

        let mut res = TestClient::get("http://example.com/orders/history")
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: OrderHistoryEnvelope = res.take_json().await?;

        assert_eq!(body.message, "Order history retrieved successfully");
        assert_eq!(body.orders.len(), 2);
        assert_eq!(body.orders[0].uuid, expected[0].into_uuid());
        assert_eq!(body.orders[1].uuid, expected[1].into_uuid());

        Ok(())
    }

    #[tokio::test]
    async fn test_history_with_no_orders_returns_empty_list() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_order_history()
            .once()
            .return_once(|_| Ok(Vec::new()));

        let mut res = TestClient::get("http://example.com/orders/history")
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: OrderHistoryEnvelope = res.take_json().await?;

        assert!(body.success);
        assert!(body.orders.is_empty());

        Ok(())
    }
}
