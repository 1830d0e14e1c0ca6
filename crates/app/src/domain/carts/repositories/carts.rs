//! Carts Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::{
    auth::models::UserUuid,
    database::try_get_amount,
    domain::carts::models::{Cart, CartUuid},
};

const FIND_CART_BY_OWNER_SQL: &str = include_str!("../sql/find_cart_by_owner.sql");
const FIND_CART_BY_OWNER_FOR_UPDATE_SQL: &str =
    include_str!("../sql/find_cart_by_owner_for_update.sql");
const GET_OR_CREATE_CART_SQL: &str = include_str!("../sql/get_or_create_cart.sql");
const RECOMPUTE_BILL_SQL: &str = include_str!("../sql/recompute_bill.sql");
const RESET_BILL_SQL: &str = include_str!("../sql/reset_bill.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCartsRepository;

impl PgCartsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn find_cart_by_owner(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        owner: UserUuid,
    ) -> Result<Option<Cart>, sqlx::Error> {
        query_as::<Postgres, Cart>(FIND_CART_BY_OWNER_SQL)
            .bind(owner.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    /// Same lookup, but locks the cart row so concurrent mutations of one
    /// user's cart serialize.
    pub(crate) async fn find_cart_by_owner_for_update(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        owner: UserUuid,
    ) -> Result<Option<Cart>, sqlx::Error> {
        query_as::<Postgres, Cart>(FIND_CART_BY_OWNER_FOR_UPDATE_SQL)
            .bind(owner.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn get_or_create_cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
        owner: UserUuid,
    ) -> Result<Cart, sqlx::Error> {
        query_as::<Postgres, Cart>(GET_OR_CREATE_CART_SQL)
            .bind(cart.into_uuid())
            .bind(owner.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    /// Re-derive `bill` from the cart's items and return the new value.
    pub(crate) async fn recompute_bill(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
    ) -> Result<u64, sqlx::Error> {
        let row = query(RECOMPUTE_BILL_SQL)
            .bind(cart.into_uuid())
            .fetch_one(&mut **tx)
            .await?;

        try_get_amount(&row, "bill")
    }

    pub(crate) async fn reset_bill(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
    ) -> Result<(), sqlx::Error> {
        query(RESET_BILL_SQL)
            .bind(cart.into_uuid())
            .execute(&mut **tx)
            .await?;

        Ok(())
    }
}

impl<'r> FromRow<'r, PgRow> for Cart {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: CartUuid::from_uuid(row.try_get("uuid")?),
            owner_uuid: UserUuid::from_uuid(row.try_get("owner_uuid")?),
            bill: try_get_amount(row, "bill")?,
            items: Vec::new(),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
