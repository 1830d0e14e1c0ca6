//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use storefront_app::{
    auth::{MockAuthService, models::UserUuid},
    context::AppContext,
    domain::{
        carts::{
            MockCartsService,
            models::{Cart, CartItem, CartItemUuid, CartUuid},
        },
        orders::{
            MockOrdersService,
            models::{Order, OrderItem, OrderItemUuid, OrderUuid},
        },
        products::{MockProductsService, models::ProductUuid},
    },
};

use crate::{extensions::*, state::State};

pub(crate) const TEST_USER_UUID: UserUuid = UserUuid::from_uuid(Uuid::nil());

/// Hoop standing in for the auth middleware in handler tests.
#[salvo::handler]
pub(crate) async fn inject_user(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_user_uuid(TEST_USER_UUID);
    ctrl.call_next(req, depot, res).await;
}

fn strict_auth_mock() -> MockAuthService {
    let mut auth = MockAuthService::new();

    auth.expect_authenticate_bearer().never();
    auth.expect_issue_api_token().never();

    auth
}

fn strict_carts_mock() -> MockCartsService {
    let mut carts = MockCartsService::new();

    carts.expect_get_cart().never();
    carts.expect_add_item().never();
    carts.expect_update_quantity().never();
    carts.expect_remove_item().never();

    carts
}

fn strict_orders_mock() -> MockOrdersService {
    let mut orders = MockOrdersService::new();

    orders.expect_place_order().never();
    orders.expect_get_order().never();
    orders.expect_order_history().never();

    orders
}

fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_get_product().never();
    products.expect_create_product().never();

    products
}

fn app_context(
    carts: MockCartsService,
    orders: MockOrdersService,
    auth: MockAuthService,
) -> AppContext {
    AppContext {
        carts: Arc::new(carts),
        orders: Arc::new(orders),
        products: Arc::new(strict_products_mock()),
        auth: Arc::new(auth),
    }
}

pub(crate) fn state_with_carts(carts: MockCartsService) -> Arc<State> {
    Arc::new(State::new(app_context(
        carts,
        strict_orders_mock(),
        strict_auth_mock(),
    )))
}

pub(crate) fn state_with_orders(orders: MockOrdersService) -> Arc<State> {
    Arc::new(State::new(app_context(
        strict_carts_mock(),
        orders,
        strict_auth_mock(),
    )))
}

pub(crate) fn state_with_auth(auth: MockAuthService) -> Arc<State> {
    Arc::new(State::new(app_context(
        strict_carts_mock(),
        strict_orders_mock(),
        auth,
    )))
}

pub(crate) fn carts_service(carts: MockCartsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_carts(carts)))
            .hoop(inject_user)
            .push(route),
    )
}

pub(crate) fn orders_service(orders: MockOrdersService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_orders(orders)))
            .hoop(inject_user)
            .push(route),
    )
}

pub(crate) fn make_cart(owner: UserUuid, items: Vec<CartItem>) -> Cart {
    let bill = items.iter().map(|item| item.price * item.quantity).sum();

    Cart {
        uuid: CartUuid::new(),
        owner_uuid: owner,
        bill,
        items,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_cart_item(product: ProductUuid, name: &str, price: u64, quantity: u64) -> CartItem {
    CartItem {
        uuid: CartItemUuid::new(),
        product_uuid: product,
        name: name.to_string(),
        price,
        quantity,
        added_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_order(owner: UserUuid, items: Vec<OrderItem>) -> Order {
    let total_amount = items.iter().map(|item| item.price * item.quantity).sum();

    Order {
        uuid: OrderUuid::new(),
        owner_uuid: owner,
        total_amount,
        items,
        created_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_order_item(name: &str, price: u64, quantity: u64) -> OrderItem {
    OrderItem {
        uuid: OrderItemUuid::new(),
        product_uuid: ProductUuid::new(),
        name: name.to_string(),
        price,
        quantity,
    }
}
