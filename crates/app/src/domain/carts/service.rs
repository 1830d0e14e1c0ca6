//! Carts service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::{Postgres, Transaction};

use crate::{
    auth::models::UserUuid,
    database::Db,
    domain::{
        carts::{
            errors::CartsServiceError,
            models::{Cart, CartItemUuid, CartUuid, NewCartItem},
            repositories::{PgCartItemsRepository, PgCartsRepository},
        },
        products::{models::ProductUuid, repository::PgProductsRepository},
    },
};

#[derive(Debug, Clone)]
pub struct PgCartsService {
    db: Db,
    carts_repository: PgCartsRepository,
    items_repository: PgCartItemsRepository,
    products_repository: PgProductsRepository,
}

impl PgCartsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            carts_repository: PgCartsRepository::new(),
            items_repository: PgCartItemsRepository::new(),
            products_repository: PgProductsRepository::new(),
        }
    }

    /// Assemble the cart with its items, newest addition first.
    async fn load_cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        owner: UserUuid,
    ) -> Result<Cart, CartsServiceError> {
        let mut cart = self
            .carts_repository
            .find_cart_by_owner(tx, owner)
            .await?
            .ok_or(CartsServiceError::CartNotFound)?;

        let items = self.items_repository.get_cart_items(tx, cart.uuid).await?;

        cart.items.extend(items);

        Ok(cart)
    }
}

#[async_trait]
impl CartsService for PgCartsService {
    async fn get_cart(&self, owner: UserUuid) -> Result<Cart, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let cart = self.load_cart(&mut tx, owner).await?;

        tx.commit().await?;

        Ok(cart)
    }

    async fn add_item(
        &self,
        owner: UserUuid,
        product: ProductUuid,
    ) -> Result<Cart, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let product = self
            .products_repository
            .get_product(&mut tx, product)
            .await?
            .ok_or(CartsServiceError::ProductNotFound)?;

        let cart = self
            .carts_repository
            .get_or_create_cart(&mut tx, CartUuid::new(), owner)
            .await?;

        match self
            .items_repository
            .find_item(&mut tx, cart.uuid, product.uuid)
            .await?
        {
            Some(item) => {
                if item.quantity + 1 > product.stock {
                    return Err(CartsServiceError::QuantityExceedsStock);
                }

                self.items_repository
                    .set_item_quantity(&mut tx, item.uuid, item.quantity + 1)
                    .await?;
            }
            None => {
                self.items_repository
                    .insert_item(
                        &mut tx,
                        cart.uuid,
                        NewCartItem {
                            uuid: CartItemUuid::new(),
                            product_uuid: product.uuid,
                            name: product.name.clone(),
                            price: product.price,
                        },
                    )
                    .await?;
            }
        }

        self.carts_repository
            .recompute_bill(&mut tx, cart.uuid)
            .await?;

        let cart = self.load_cart(&mut tx, owner).await?;

        tx.commit().await?;

        Ok(cart)
    }

    async fn update_quantity(
        &self,
        owner: UserUuid,
        product: ProductUuid,
        quantity: u64,
    ) -> Result<Cart, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let cart = self
            .carts_repository
            .find_cart_by_owner_for_update(&mut tx, owner)
            .await?
            .ok_or(CartsServiceError::CartNotFound)?;

        let item = self
            .items_repository
            .find_item(&mut tx, cart.uuid, product)
            .await?
            .ok_or(CartsServiceError::ItemNotFound)?;

        let product = self
            .products_repository
            .get_product(&mut tx, product)
            .await?
            .ok_or(CartsServiceError::ProductNotFound)?;

        if quantity == 0 {
            self.items_repository
                .delete_item(&mut tx, cart.uuid, product.uuid)
                .await?;
        } else if quantity <= product.stock {
            self.items_repository
                .set_item_quantity(&mut tx, item.uuid, quantity)
                .await?;
        } else {
            return Err(CartsServiceError::QuantityExceedsStock);
        }

        self.carts_repository
            .recompute_bill(&mut tx, cart.uuid)
            .await?;

        let cart = self.load_cart(&mut tx, owner).await?;

        tx.commit().await?;

        Ok(cart)
    }

    async fn remove_item(
        &self,
        owner: UserUuid,
        product: ProductUuid,
    ) -> Result<Cart, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let cart = self
            .carts_repository
            .find_cart_by_owner_for_update(&mut tx, owner)
            .await?
            .ok_or(CartsServiceError::CartNotFound)?;

        let rows_affected = self
            .items_repository
            .delete_item(&mut tx, cart.uuid, product)
            .await?;

        if rows_affected == 0 {
            return Err(CartsServiceError::ItemNotFound);
        }

        self.carts_repository
            .recompute_bill(&mut tx, cart.uuid)
            .await?;

        let cart = self.load_cart(&mut tx, owner).await?;

        tx.commit().await?;

        Ok(cart)
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Retrieve the owner's cart. Never creates one.
    async fn get_cart(&self, owner: UserUuid) -> Result<Cart, CartsServiceError>;

    /// Add one unit of a product, creating the cart on first use. A line
    /// already in the cart has its quantity incremented instead, capped at
    /// the product's current stock.
    async fn add_item(
        &self,
        owner: UserUuid,
        product: ProductUuid,
    ) -> Result<Cart, CartsServiceError>;

    /// Set (not increment) a line's quantity; zero removes the line.
    async fn update_quantity(
        &self,
        owner: UserUuid,
        product: ProductUuid,
        quantity: u64,
    ) -> Result<Cart, CartsServiceError>;

    /// Remove a line from the cart.
    async fn remove_item(
        &self,
        owner: UserUuid,
        product: ProductUuid,
    ) -> Result<Cart, CartsServiceError>;
}
