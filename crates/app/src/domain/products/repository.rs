//! Products Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::{
    database::try_get_amount,
    domain::products::models::{NewProduct, Product, ProductUuid},
};

const GET_PRODUCT_SQL: &str = include_str!("sql/get_product.sql");
const GET_PRODUCT_FOR_UPDATE_SQL: &str = include_str!("sql/get_product_for_update.sql");
const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");
const DECREMENT_STOCK_SQL: &str = include_str!("sql/decrement_stock.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProductsRepository;

impl PgProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn get_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<Option<Product>, sqlx::Error> {
        query_as::<Postgres, Product>(GET_PRODUCT_SQL)
            .bind(product.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    /// Read a product row and lock it for the rest of the transaction.
    ///
    /// Checkout relies on this lock: the stock check and the decrement that
    /// follows act on the same row version.
    pub(crate) async fn get_product_for_update(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<Option<Product>, sqlx::Error> {
        query_as::<Postgres, Product>(GET_PRODUCT_FOR_UPDATE_SQL)
            .bind(product.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn create_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: NewProduct,
    ) -> Result<Product, sqlx::Error> {
        query_as::<Postgres, Product>(CREATE_PRODUCT_SQL)
            .bind(product.uuid.into_uuid())
            .bind(&product.name)
            .bind(to_amount(product.price, "price")?)
            .bind(to_amount(product.stock, "stock")?)
            .fetch_one(&mut **tx)
            .await
    }

    /// Conditionally decrement stock; affects no rows when stock is short.
    pub(crate) async fn decrement_stock(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
        quantity: u64,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DECREMENT_STOCK_SQL)
            .bind(product.into_uuid())
            .bind(to_amount(quantity, "quantity")?)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

fn to_amount(value: u64, col: &str) -> Result<i64, sqlx::Error> {
    i64::try_from(value).map_err(|e| sqlx::Error::ColumnDecode {
        index: col.to_string(),
        source: Box::new(e),
    })
}

impl<'r> FromRow<'r, PgRow> for Product {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: ProductUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            price: try_get_amount(row, "price")?,
            stock: try_get_amount(row, "stock")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
