//! Products service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::products::{
        errors::ProductsServiceError,
        models::{NewProduct, Product, ProductUuid},
        repository::PgProductsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgProductsService {
    db: Db,
    repository: PgProductsRepository,
}

impl PgProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgProductsRepository::new(),
        }
    }
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn get_product(&self, product: ProductUuid) -> Result<Product, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let product = self
            .repository
            .get_product(&mut tx, product)
            .await?
            .ok_or(ProductsServiceError::NotFound)?;

        tx.commit().await?;

        Ok(product)
    }

    async fn create_product(&self, product: NewProduct) -> Result<Product, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self.repository.create_product(&mut tx, product).await?;

        tx.commit().await?;

        Ok(created)
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieve a single catalog entry.
    async fn get_product(&self, product: ProductUuid) -> Result<Product, ProductsServiceError>;

    /// Creates a new catalog entry with the given details.
    async fn create_product(&self, product: NewProduct) -> Result<Product, ProductsServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test::TestContext;

    use super::*;

    #[tokio::test]
    async fn create_product_returns_created_row() -> TestResult {
        let ctx = TestContext::new().await;
        let uuid = ProductUuid::new();

        let product = ctx
            .products
            .create_product(NewProduct {
                uuid,
                name: "Keyboard".to_string(),
                price: 49_99,
                stock: 12,
            })
            .await?;

        assert_eq!(product.uuid, uuid);
        assert_eq!(product.name, "Keyboard");
        assert_eq!(product.price, 49_99);
        assert_eq!(product.stock, 12);

        Ok(())
    }

    #[tokio::test]
    async fn get_product_returns_created_product() -> TestResult {
        let ctx = TestContext::new().await;

        let created = ctx.create_product("Mouse", 19_99, 5).await;
        let fetched = ctx.products.get_product(created.uuid).await?;

        assert_eq!(fetched.uuid, created.uuid);
        assert_eq!(fetched.price, created.price);

        Ok(())
    }

    #[tokio::test]
    async fn get_product_unknown_uuid_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.products.get_product(ProductUuid::new()).await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn create_product_duplicate_uuid_returns_already_exists() -> TestResult {
        let ctx = TestContext::new().await;
        let uuid = ProductUuid::new();

        ctx.products
            .create_product(NewProduct {
                uuid,
                name: "Desk".to_string(),
                price: 150_00,
                stock: 3,
            })
            .await?;

        let result = ctx
            .products
            .create_product(NewProduct {
                uuid,
                name: "Desk".to_string(),
                price: 150_00,
                stock: 3,
            })
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );

        Ok(())
    }
}
