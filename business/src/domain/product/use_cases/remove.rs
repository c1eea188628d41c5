use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct RemoveProductParams {
    pub id: i64,
}

/// Soft delete: flips the product's availability off and returns the
/// updated record. Removing a product that is missing or already
/// unavailable fails with `ProductError::NotFound`.
#[async_trait]
pub trait RemoveProductUseCase: Send + Sync {
    async fn execute(&self, params: RemoveProductParams) -> Result<Product, ProductError>;
}
