//! Orders service and the checkout coordinator.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    auth::models::UserUuid,
    database::Db,
    domain::{
        carts::repositories::{PgCartItemsRepository, PgCartsRepository},
        orders::{
            errors::OrdersServiceError,
            models::{Order, OrderItem, OrderItemUuid, OrderUuid},
            repository::PgOrdersRepository,
        },
        products::repository::PgProductsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgOrdersService {
    db: Db,
    repository: PgOrdersRepository,
    carts_repository: PgCartsRepository,
    items_repository: PgCartItemsRepository,
    products_repository: PgProductsRepository,
}

impl PgOrdersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgOrdersRepository::new(),
            carts_repository: PgCartsRepository::new(),
            items_repository: PgCartItemsRepository::new(),
            products_repository: PgProductsRepository::new(),
        }
    }
}

#[async_trait]
impl OrdersService for PgOrdersService {
    /// Convert the owner's cart into an order.
    ///
    /// The whole sequence runs in one transaction: re-read each product under
    /// a row lock, verify stock, decrement it, snapshot the cart lines into
    /// order items, freeze `total_amount` from the cart's bill, and clear the
    /// cart. Any failure before commit rolls the lot back, so a rejected
    /// checkout leaves stock, cart, and orders exactly as they were.
    async fn place_order(&self, owner: UserUuid) -> Result<Order, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let Some(cart) = self
            .carts_repository
            .find_cart_by_owner_for_update(&mut tx, owner)
            .await?
        else {
            return Err(OrdersServiceError::EmptyCart);
        };

        let cart_items = self
            .items_repository
            .get_cart_items(&mut tx, cart.uuid)
            .await?;

        if cart_items.is_empty() {
            return Err(OrdersServiceError::EmptyCart);
        }

        let order_uuid = OrderUuid::new();
        let mut snapshot = Vec::with_capacity(cart_items.len());

        for item in &cart_items {
            let product = self
                .products_repository
                .get_product_for_update(&mut tx, item.product_uuid)
                .await?
                .ok_or_else(|| OrdersServiceError::ProductNotFound {
                    name: item.name.clone(),
                })?;

            if product.stock < item.quantity {
                return Err(OrdersServiceError::InsufficientStock {
                    name: item.name.clone(),
                });
            }

            let rows_affected = self
                .products_repository
                .decrement_stock(&mut tx, item.product_uuid, item.quantity)
                .await?;

            // The row is locked since the read above, so a miss here means
            // the guard raced something unexpected; refuse rather than
            // oversell.
            if rows_affected == 0 {
                return Err(OrdersServiceError::InsufficientStock {
                    name: item.name.clone(),
                });
            }

            snapshot.push(OrderItem {
                uuid: OrderItemUuid::new(),
                product_uuid: item.product_uuid,
                name: item.name.clone(),
                price: item.price,
                quantity: item.quantity,
            });
        }

        // total_amount comes from the cart's bill, not from live prices.
        let mut order = self
            .repository
            .create_order(&mut tx, order_uuid, owner, cart.bill)
            .await?;

        for (position, item) in snapshot.iter().enumerate() {
            let position = i64::try_from(position).map_err(|_ignored| {
                OrdersServiceError::Sql(sqlx::Error::Protocol("order too large".to_string()))
            })?;

            self.repository
                .insert_order_item(&mut tx, order_uuid, position, item)
                .await?;
        }

        self.items_repository
            .delete_items(&mut tx, cart.uuid)
            .await?;
        self.carts_repository.reset_bill(&mut tx, cart.uuid).await?;

        tx.commit().await?;

        info!(
            order_uuid = %order.uuid,
            total_amount = order.total_amount,
            "order placed"
        );

        order.items = snapshot;

        Ok(order)
    }

    async fn get_order(
        &self,
        owner: UserUuid,
        order: OrderUuid,
    ) -> Result<Order, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let mut order = self
            .repository
            .find_order(&mut tx, owner, order)
            .await?
            .ok_or(OrdersServiceError::NotFound)?;

        let items = self.repository.get_order_items(&mut tx, order.uuid).await?;

        tx.commit().await?;

        order.items = items;

        Ok(order)
    }

    async fn order_history(&self, owner: UserUuid) -> Result<Vec<Order>, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let mut orders = self
            .repository
            .list_orders_by_owner(&mut tx, owner)
            .await?;

        for order in &mut orders {
            order.items = self.repository.get_order_items(&mut tx, order.uuid).await?;
        }

        tx.commit().await?;

        Ok(orders)
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Atomically turn the owner's cart into a persisted order, decrementing
    /// stock and emptying the cart. All-or-nothing.
    async fn place_order(&self, owner: UserUuid) -> Result<Order, OrdersServiceError>;

    /// Retrieve a single order, scoped to its owner.
    async fn get_order(
        &self,
        owner: UserUuid,
        order: OrderUuid,
    ) -> Result<Order, OrdersServiceError>;

    /// The owner's order history, newest first.
    async fn order_history(&self, owner: UserUuid) -> Result<Vec<Order>, OrdersServiceError>;
}
