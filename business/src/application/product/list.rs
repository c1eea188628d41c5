use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{PageMeta, ProductPage};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::list::{ListProductsParams, ListProductsUseCase};

pub struct ListProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListProductsUseCase for ListProductsUseCaseImpl {
    async fn execute(&self, params: ListProductsParams) -> Result<ProductPage, ProductError> {
        let pagination = params.pagination;
        self.logger.debug(&format!(
            "Listing products: page {} limit {}",
            pagination.page, pagination.limit
        ));

        let total = self.repository.count_available().await?;
        let data = self
            .repository
            .find_available(pagination.offset(), pagination.limit)
            .await?;

        Ok(ProductPage {
            data,
            meta: PageMeta::new(total, &pagination),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::{NewProduct, Product, UpdateProduct};
    use crate::domain::shared::pagination::Pagination;
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

    fn available_product(id: i64) -> Product {
        let now = Utc::now();
        Product {
            id,
            name: format!("Product {id}"),
            price: 5.0,
            description: None,
            available: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn should_build_meta_from_available_count() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_count_available().returning(|| Ok(25));
        mock_repo
            .expect_find_available()
            .withf(|offset, limit| *offset == 10 && *limit == 10)
            .returning(|_, _| Ok((11..=20).map(available_product).collect()));

        let use_case = ListProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let page = use_case
            .execute(ListProductsParams {
                pagination: Pagination::new(2, 10),
            })
            .await
            .unwrap();

        assert_eq!(page.meta.total, 25);
        assert_eq!(page.meta.page, 2);
        assert_eq!(page.meta.last_page, 3);
        assert_eq!(page.data.len(), 10);
    }

    #[tokio::test]
    async fn should_return_empty_page_when_offset_exceeds_total() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_count_available().returning(|| Ok(3));
        mock_repo
            .expect_find_available()
            .withf(|offset, limit| *offset == 90 && *limit == 10)
            .returning(|_, _| Ok(vec![]));

        let use_case = ListProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let page = use_case
            .execute(ListProductsParams {
                pagination: Pagination::new(10, 10),
            })
            .await
            .unwrap();

        assert!(page.data.is_empty());
        assert_eq!(page.meta.total, 3);
        assert_eq!(page.meta.page, 10);
        assert_eq!(page.meta.last_page, 1);
    }

    #[tokio::test]
    async fn should_propagate_count_failure() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_count_available()
            .returning(|| Err(RepositoryError::DatabaseError));

        let use_case = ListProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ListProductsParams {
                pagination: Pagination::new(1, 10),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::Repository(RepositoryError::DatabaseError)
        ));
    }
}
