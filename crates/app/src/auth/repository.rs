//! Auth repository.

use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query, query_as};
use uuid::Uuid;

use crate::auth::models::{ApiToken, UserUuid};

const FIND_USER_BY_TOKEN_HASH_SQL: &str = include_str!("sql/find_user_by_token_hash.sql");
const INSERT_API_TOKEN_SQL: &str = include_str!("sql/insert_api_token.sql");

#[derive(Debug, Clone)]
pub(crate) struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    #[must_use]
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub(crate) async fn find_user_by_token_hash(
        &self,
        hash: &str,
    ) -> Result<Option<UserUuid>, sqlx::Error> {
        query_as::<Postgres, ApiToken>(FIND_USER_BY_TOKEN_HASH_SQL)
            .bind(hash)
            .fetch_optional(&self.pool)
            .await
            .map(|record| record.map(|record| record.user_uuid))
    }

    pub(crate) async fn insert_api_token(
        &self,
        uuid: Uuid,
        user: UserUuid,
        token_hash: &str,
    ) -> Result<(), sqlx::Error> {
        query(INSERT_API_TOKEN_SQL)
            .bind(uuid)
            .bind(user.into_uuid())
            .bind(token_hash)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

impl<'r> FromRow<'r, PgRow> for ApiToken {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: row.try_get("uuid")?,
            user_uuid: row.try_get::<Uuid, _>("user_uuid")?.into(),
            token_hash: row.try_get("token_hash")?,
        })
    }
}
