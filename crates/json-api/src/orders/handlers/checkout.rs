//! Checkout Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    errors::ApiError,
    extensions::*,
    orders::{errors::into_api_error, responses::OrderEnvelope},
    state::State,
};

/// Convert the caller's cart into an order.
#[salvo::handler]
pub(crate) async fn handler(
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<OrderEnvelope>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    let order = state
        .app
        .orders
        .place_order(user)
        .await
        .map_err(into_api_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(OrderEnvelope::new("Order placed successfully", order)))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use storefront_app::domain::orders::{MockOrdersService, OrdersServiceError};

    use crate::{
        errors::ErrorBody,
        test_helpers::{TEST_USER_UUID, make_order, make_order_item, orders_service},
    };

    use super::*;

    fn make_service(orders: MockOrdersService) -> Service {
        orders_service(orders, Router::with_path("orders").post(handler))
    }

    #[tokio::test]
    async fn test_checkout_returns_201_with_order() -> TestResult {
        let order = make_order(
            TEST_USER_UUID,
            vec![
                make_order_item("A", 10_00, 2),
                make_order_item("B", 5_00, 1),
            ],
        );

        let mut orders = MockOrdersService::new();

        orders
            .expect_place_order()
            .once()
            .withf(|user| *user == TEST_USER_UUID)
            .return_once(move |_| Ok(order));

        let mut res = TestClient::post("http://example.com/orders")
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        let body: OrderEnvelope = res.take_json().await?;

        assert!(body.success);
        assert_eq!(body.message, "Order placed successfully");
        assert_eq!(body.order.total_amount, 25_00);
        assert_eq!(body.order.items.len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn test_checkout_empty_cart_returns_400() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_place_order()
            .once()
            .return_once(|_| Err(OrdersServiceError::EmptyCart));

        let mut res = TestClient::post("http://example.com/orders")
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        let body: ErrorBody = res.take_json().await?;

        assert_eq!(body.message, "No products found in cart");

        Ok(())
    }

    #[tokio::test]
    async fn test_checkout_insufficient_stock_returns_400_naming_item() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders.expect_place_order().once().return_once(|_| {
            Err(OrdersServiceError::InsufficientStock {
                name: "Scarce".to_string(),
            })
        });

        let mut res = TestClient::post("http://example.com/orders")
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        let body: ErrorBody = res.take_json().await?;

        assert_eq!(body.message, "Insufficient quantity for product: Scarce");

        Ok(())
    }

    #[tokio::test]
    async fn test_checkout_vanished_product_returns_404_naming_item() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders.expect_place_order().once().return_once(|_| {
            Err(OrdersServiceError::ProductNotFound {
                name: "Ghost".to_string(),
            })
        });

        let mut res = TestClient::post("http://example.com/orders")
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        let body: ErrorBody = res.take_json().await?;

        assert_eq!(body.message, "Product not found: Ghost");

        Ok(())
    }
}
