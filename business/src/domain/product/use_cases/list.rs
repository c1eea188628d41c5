use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::ProductPage;
use crate::domain::shared::pagination::Pagination;

pub struct ListProductsParams {
    pub pagination: Pagination,
}

#[async_trait]
pub trait ListProductsUseCase: Send + Sync {
    async fn execute(&self, params: ListProductsParams) -> Result<ProductPage, ProductError>;
}
