use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{NewProduct, Product, UpdateProduct};
use business::domain::product::repository::ProductRepository;

use super::entity::ProductEntity;

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn insert(&self, product: NewProduct) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            "INSERT INTO products (name, price, description) VALUES ($1, $2, $3) RETURNING id, name, price, description, available, created_at, updated_at",
        )
        .bind(&product.name)
        .bind(product.price)
        .bind(&product.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entity.into_domain())
    }

    async fn count_available(&self) -> Result<i64, RepositoryError> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM products WHERE available = TRUE")
                .fetch_one(&self.pool)
                .await
                .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(count)
    }

    async fn find_available(
        &self,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Product>, RepositoryError> {
        // Ordered by id so pages stay stable between the count and the fetch.
        let entities = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, name, price, description, available, created_at, updated_at FROM products WHERE available = TRUE ORDER BY id OFFSET $1 LIMIT $2",
        )
        .bind(offset)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn find_available_by_id(&self, id: i64) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, name, price, description, available, created_at, updated_at FROM products WHERE id = $1 AND available = TRUE",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn update(&self, id: i64, changes: UpdateProduct) -> Result<Product, RepositoryError> {
        // COALESCE keeps every column whose change is None. The row is
        // matched on id alone: updates apply to unavailable products too.
        let entity = sqlx::query_as::<_, ProductEntity>(
            r#"UPDATE products SET
                name = COALESCE($2, name),
                price = COALESCE($3, price),
                description = COALESCE($4, description),
                available = COALESCE($5, available),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, price, description, available, created_at, updated_at"#,
        )
        .bind(id)
        .bind(changes.name)
        .bind(changes.price)
        .bind(changes.description)
        .bind(changes.available)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }
}
