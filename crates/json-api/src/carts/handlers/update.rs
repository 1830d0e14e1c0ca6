//! Update Cart Item Quantity Handler

use std::sync::Arc;

use salvo::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
    carts::{errors::into_api_error, handlers::product_param, responses::CartEnvelope},
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Update Quantity Request
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct UpdateQuantityRequest {
    /// New absolute quantity; zero removes the line
    pub quantity: u64,
}

/// Set a cart line's quantity; zero removes it.
#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<CartEnvelope>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;
    let product = product_param(req)?;

    let payload = req
        .parse_json::<UpdateQuantityRequest>()
        .await
        .map_err(|_ignored| ApiError::bad_request("Invalid quantity value"))?;

    let cart = state
        .app
        .carts
        .update_quantity(user, product, payload.quantity)
        .await
        .map_err(into_api_error)?;

    let message = if payload.quantity == 0 {
        "Product removed from cart"
    } else {
        "Product quantity updated in cart"
    };

    Ok(Json(CartEnvelope::new(message, cart)))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;
    use uuid::Uuid;

    use storefront_app::domain::{
        carts::{CartsServiceError, MockCartsService},
        products::models::ProductUuid,
    };

    use crate::{
        errors::ErrorBody,
        test_helpers::{TEST_USER_UUID, carts_service, make_cart, make_cart_item},
    };

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        carts_service(carts, Router::with_path("cart/{product}").put(handler))
    }

    #[tokio::test]
    async fn test_update_returns_200_with_updated_message() -> TestResult {
        let product = ProductUuid::new();
        let cart = make_cart(
            TEST_USER_UUID,
            vec![make_cart_item(product, "Mug", 8_00, 3)],
        );

        let mut carts = MockCartsService::new();

        carts
            .expect_update_quantity()
            .once()
            .withf(move |user, p, quantity| {
                *user == TEST_USER_UUID && *p == product && *quantity == 3
            })
            .return_once(move |_, _, _| Ok(cart));

        let mut res = TestClient::put(format!("http://example.com/cart/{product}"))
            .json(&json!({ "quantity": 3 }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: CartEnvelope = res.take_json().await?;

        assert_eq!(body.message, "Product quantity updated in cart");
        assert_eq!(body.cart.items[0].quantity, 3);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_to_zero_uses_removed_message() -> TestResult {
        let product = ProductUuid::new();
        let cart = make_cart(TEST_USER_UUID, vec![]);

        let mut carts = MockCartsService::new();

        carts
            .expect_update_quantity()
            .once()
            .withf(move |_, p, quantity| *p == product && *quantity == 0)
            .return_once(move |_, _, _| Ok(cart));

        let mut res = TestClient::put(format!("http://example.com/cart/{product}"))
            .json(&json!({ "quantity": 0 }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: CartEnvelope = res.take_json().await?;

        assert_eq!(body.message, "Product removed from cart");
        assert!(body.cart.items.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_update_negative_quantity_returns_400() -> TestResult {
        let product = Uuid::now_v7();

        let mut carts = MockCartsService::new();

        carts.expect_update_quantity().never();

        let mut res = TestClient::put(format!("http://example.com/cart/{product}"))
            .json(&json!({ "quantity": -2 }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        let body: ErrorBody = res.take_json().await?;

        assert_eq!(body.message, "Invalid quantity value");

        Ok(())
    }

    #[tokio::test]
    async fn test_update_beyond_stock_returns_400() -> TestResult {
        let product = Uuid::now_v7();

        let mut carts = MockCartsService::new();

        carts
            .expect_update_quantity()
            .once()
            .return_once(|_, _, _| Err(CartsServiceError::QuantityExceedsStock));

        let mut res = TestClient::put(format!("http://example.com/cart/{product}"))
            .json(&json!({ "quantity": 50 }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        let body: ErrorBody = res.take_json().await?;

        assert_eq!(body.message, "Exceeds available quantity");

        Ok(())
    }

    #[tokio::test]
    async fn test_update_missing_line_returns_404() -> TestResult {
        let product = Uuid::now_v7();

        let mut carts = MockCartsService::new();

        carts
            .expect_update_quantity()
            .once()
            .return_once(|_, _, _| Err(CartsServiceError::ItemNotFound));

        let mut res = TestClient::put(format!("http://example.com/cart/{product}"))
            .json(&json!({ "quantity": 2 }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        let body: ErrorBody = res.take_json().await?;

        assert_eq!(body.message, "Product not found in cart");

        Ok(())
    }
}
