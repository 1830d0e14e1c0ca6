//! Orders Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::{
    auth::models::UserUuid,
    database::try_get_amount,
    domain::{
        orders::models::{Order, OrderItem, OrderItemUuid, OrderUuid},
        products::models::ProductUuid,
    },
};

const CREATE_ORDER_SQL: &str = include_str!("sql/create_order.sql");
const INSERT_ORDER_ITEM_SQL: &str = include_str!("sql/insert_order_item.sql");
const FIND_ORDER_SQL: &str = include_str!("sql/find_order.sql");
const LIST_ORDERS_SQL: &str = include_str!("sql/list_orders.sql");
const GET_ORDER_ITEMS_SQL: &str = include_str!("sql/get_order_items.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOrdersRepository;

impl PgOrdersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        owner: UserUuid,
        total_amount: u64,
    ) -> Result<Order, sqlx::Error> {
        query_as::<Postgres, Order>(CREATE_ORDER_SQL)
            .bind(order.into_uuid())
            .bind(owner.into_uuid())
            .bind(to_amount(total_amount)?)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn insert_order_item(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        position: i64,
        item: &OrderItem,
    ) -> Result<(), sqlx::Error> {
        query(INSERT_ORDER_ITEM_SQL)
            .bind(item.uuid.into_uuid())
            .bind(order.into_uuid())
            .bind(item.product_uuid.into_uuid())
            .bind(&item.name)
            .bind(to_amount(item.price)?)
            .bind(to_amount(item.quantity)?)
            .bind(position)
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    pub(crate) async fn find_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        owner: UserUuid,
        order: OrderUuid,
    ) -> Result<Option<Order>, sqlx::Error> {
        query_as::<Postgres, Order>(FIND_ORDER_SQL)
            .bind(order.into_uuid())
            .bind(owner.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    /// The owner's orders, newest first.
    pub(crate) async fn list_orders_by_owner(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        owner: UserUuid,
    ) -> Result<Vec<Order>, sqlx::Error> {
        query_as::<Postgres, Order>(LIST_ORDERS_SQL)
            .bind(owner.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_order_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
    ) -> Result<Vec<OrderItem>, sqlx::Error> {
        query_as::<Postgres, OrderItem>(GET_ORDER_ITEMS_SQL)
            .bind(order.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }
}

fn to_amount(value: u64) -> Result<i64, sqlx::Error> {
    i64::try_from(value).map_err(|e| sqlx::Error::ColumnDecode {
        index: "amount".to_string(),
        source: Box::new(e),
    })
}

impl<'r> FromRow<'r, PgRow> for Order {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: OrderUuid::from_uuid(row.try_get("uuid")?),
            owner_uuid: UserUuid::from_uuid(row.try_get("owner_uuid")?),
            total_amount: try_get_amount(row, "total_amount")?,
            items: Vec::new(),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for OrderItem {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: OrderItemUuid::from_uuid(row.try_get("uuid")?),
            product_uuid: ProductUuid::from_uuid(row.try_get("product_uuid")?),
            name: row.try_get("name")?,
            price: try_get_amount(row, "price")?,
            quantity: try_get_amount(row, "quantity")?,
        })
    }
}
