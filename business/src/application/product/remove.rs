use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, UpdateProduct};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::remove::{RemoveProductParams, RemoveProductUseCase};

pub struct RemoveProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveProductUseCase for RemoveProductUseCaseImpl {
    async fn execute(&self, params: RemoveProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Removing product: {}", params.id));

        // The product must currently resolve as available. A second remove
        // on the same id therefore fails with NotFound instead of
        // succeeding silently. The check and the flip are two separate
        // round-trips with no transaction between them; a concurrent write
        // in the gap wins at the store level.
        self.repository
            .find_available_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        let product = self
            .repository
            .update(
                params.id,
                UpdateProduct {
                    available: Some(false),
                    ..Default::default()
                },
            )
            .await?;

        self.logger.info(&format!("Product removed: {}", params.id));
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::model::NewProduct;
    use chrono::Utc;
    use mockall::mock;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn insert(&self, product: NewProduct) -> Result<Product, RepositoryError>;
            async fn count_available(&self) -> Result<i64, RepositoryError>;
            async fn find_available(&self, offset: i64, limit: i64) -> Result<Vec<Product>, RepositoryError>;
            async fn find_available_by_id(&self, id: i64) -> Result<Product, RepositoryError>;
            async fn update(&self, id: i64, changes: UpdateProduct) -> Result<Product, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn product(id: i64, available: bool) -> Product {
        let now = Utc::now();
        Product {
            id,
            name: "Pizza".to_string(),
            price: 10.0,
            description: None,
            available,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn should_flip_availability_and_return_updated_record() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_available_by_id()
            .withf(|id| *id == 1)
            .returning(|id| Ok(product(id, true)));
        mock_repo
            .expect_update()
            .withf(|id, changes| {
                *id == 1
                    && changes.available == Some(false)
                    && changes.name.is_none()
                    && changes.price.is_none()
                    && changes.description.is_none()
            })
            .returning(|id, _| Ok(product(id, false)));

        let use_case = RemoveProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let removed = use_case
            .execute(RemoveProductParams { id: 1 })
            .await
            .unwrap();

        assert_eq!(removed.id, 1);
        assert!(!removed.available);
    }

    // Removal is deliberately not idempotent: once the product is
    // unavailable the availability-filtered lookup no longer sees it.
    #[tokio::test]
    async fn should_fail_not_found_when_already_removed() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_available_by_id()
            .returning(|_| Err(RepositoryError::NotFound));
        mock_repo.expect_update().never();

        let use_case = RemoveProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(RemoveProductParams { id: 1 }).await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }

    #[tokio::test]
    async fn should_propagate_flip_failure_as_repository_error() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_available_by_id()
            .returning(|id| Ok(product(id, true)));
        mock_repo
            .expect_update()
            .returning(|_, _| Err(RepositoryError::DatabaseError));

        let use_case = RemoveProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(RemoveProductParams { id: 1 }).await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::Repository(RepositoryError::DatabaseError)
        ));
    }
}
