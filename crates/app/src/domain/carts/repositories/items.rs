//! Cart Items Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::{
    database::try_get_amount,
    domain::{
        carts::models::{CartItem, CartItemUuid, CartUuid, NewCartItem},
        products::models::ProductUuid,
    },
};

const GET_CART_ITEMS_SQL: &str = include_str!("../sql/get_cart_items.sql");
const FIND_ITEM_SQL: &str = include_str!("../sql/find_item.sql");
const INSERT_ITEM_SQL: &str = include_str!("../sql/insert_item.sql");
const SET_ITEM_QUANTITY_SQL: &str = include_str!("../sql/set_item_quantity.sql");
const DELETE_ITEM_SQL: &str = include_str!("../sql/delete_item.sql");
const DELETE_ITEMS_SQL: &str = include_str!("../sql/delete_items.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCartItemsRepository;

impl PgCartItemsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Items in presentation order: newest addition first. A re-added item
    /// keeps its original slot because only its quantity changes.
    pub(crate) async fn get_cart_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
    ) -> Result<Vec<CartItem>, sqlx::Error> {
        query_as::<Postgres, CartItem>(GET_CART_ITEMS_SQL)
            .bind(cart.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn find_item(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
        product: ProductUuid,
    ) -> Result<Option<CartItem>, sqlx::Error> {
        query_as::<Postgres, CartItem>(FIND_ITEM_SQL)
            .bind(cart.into_uuid())
            .bind(product.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn insert_item(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
        item: NewCartItem,
    ) -> Result<CartItem, sqlx::Error> {
        query_as::<Postgres, CartItem>(INSERT_ITEM_SQL)
            .bind(item.uuid.into_uuid())
            .bind(cart.into_uuid())
            .bind(item.product_uuid.into_uuid())
            .bind(&item.name)
            .bind(to_amount(item.price)?)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn set_item_quantity(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        item: CartItemUuid,
        quantity: u64,
    ) -> Result<(), sqlx::Error> {
        query(SET_ITEM_QUANTITY_SQL)
            .bind(item.into_uuid())
            .bind(to_amount(quantity)?)
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    pub(crate) async fn delete_item(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
        product: ProductUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_ITEM_SQL)
            .bind(cart.into_uuid())
            .bind(product.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn delete_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
    ) -> Result<(), sqlx::Error> {
        query(DELETE_ITEMS_SQL)
            .bind(cart.into_uuid())
            .execute(&mut **tx)
            .await?;

        Ok(())
    }
}

fn to_amount(value: u64) -> Result<i64, sqlx::Error> {
    i64::try_from(value).map_err(|e| sqlx::Error::ColumnDecode {
        index: "amount".to_string(),
        source: Box::new(e),
    })
}

impl<'r> FromRow<'r, PgRow> for CartItem {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: CartItemUuid::from_uuid(row.try_get("uuid")?),
            product_uuid: ProductUuid::from_uuid(row.try_get("product_uuid")?),
            name: row.try_get("name")?,
            price: try_get_amount(row, "price")?,
            quantity: try_get_amount(row, "quantity")?,
            added_at: row.try_get::<SqlxTimestamp, _>("added_at")?.to_jiff(),
        })
    }
}
