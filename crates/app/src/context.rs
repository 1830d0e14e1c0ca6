//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    auth::{AuthService, PgAuthService},
    database::{self, Db},
    domain::{
        carts::{CartsService, PgCartsService},
        orders::{OrdersService, PgOrdersService},
        products::{PgProductsService, ProductsService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub carts: Arc<dyn CartsService>,
    pub orders: Arc<dyn OrdersService>,
    pub products: Arc<dyn ProductsService>,
    pub auth: Arc<dyn AuthService>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(url: &str) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        let db = Db::new(pool.clone());

        Ok(Self {
            carts: Arc::new(PgCartsService::new(db.clone())),
            orders: Arc::new(PgOrdersService::new(db.clone())),
            products: Arc::new(PgProductsService::new(db)),
            auth: Arc::new(PgAuthService::new(pool)),
        })
    }
}
