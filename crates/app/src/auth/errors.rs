//! Auth service errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthServiceError {
    #[error("unknown token")]
    UnknownToken,

    #[error(transparent)]
    Sql(#[from] sqlx::Error),
}
