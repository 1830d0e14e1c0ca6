//! Auth service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::{
    errors::AuthServiceError,
    models::{IssuedToken, UserUuid},
    repository::PgAuthRepository,
    token,
};

#[derive(Debug, Clone)]
pub struct PgAuthService {
    repository: PgAuthRepository,
}

impl PgAuthService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PgAuthRepository::new(pool),
        }
    }
}

#[async_trait]
impl AuthService for PgAuthService {
    async fn authenticate_bearer(&self, token: &str) -> Result<UserUuid, AuthServiceError> {
        self.repository
            .find_user_by_token_hash(&token::digest(token))
            .await?
            .ok_or(AuthServiceError::UnknownToken)
    }

    async fn issue_api_token(&self, user: UserUuid) -> Result<IssuedToken, AuthServiceError> {
        let uuid = Uuid::now_v7();
        let raw_token = token::generate();

        self.repository
            .insert_api_token(uuid, user, &token::digest(&raw_token))
            .await?;

        Ok(IssuedToken {
            uuid,
            user_uuid: user,
            token: raw_token,
        })
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Resolve a raw bearer token to the user it was issued for.
    async fn authenticate_bearer(&self, token: &str) -> Result<UserUuid, AuthServiceError>;

    /// Issue a new API token. The raw token is returned exactly once; only
    /// its digest is stored.
    async fn issue_api_token(&self, user: UserUuid) -> Result<IssuedToken, AuthServiceError>;
}
