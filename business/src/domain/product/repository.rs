use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{NewProduct, Product, UpdateProduct};

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Inserts one product and returns it with the store-assigned id.
    async fn insert(&self, product: NewProduct) -> Result<Product, RepositoryError>;
    /// Count of products with `available = true`.
    async fn count_available(&self) -> Result<i64, RepositoryError>;
    /// One page of available products, skipping `offset` rows.
    async fn find_available(&self, offset: i64, limit: i64)
    -> Result<Vec<Product>, RepositoryError>;
    /// Unique lookup restricted to available products. `NotFound` covers
    /// both a missing id and an existing-but-unavailable product.
    async fn find_available_by_id(&self, id: i64) -> Result<Product, RepositoryError>;
    /// Applies a partial change set to the product with the given id,
    /// regardless of its availability. `NotFound` when no row matches.
    async fn update(&self, id: i64, changes: UpdateProduct) -> Result<Product, RepositoryError>;
}
