use chrono::{DateTime, Utc};
use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use business::domain::product::model::{PageMeta, Product, ProductPage, UpdateProduct};

#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    /// Product name (cannot be empty)
    #[oai(validator(min_length = 1))]
    pub name: String,
    /// Product price (non-negative)
    #[oai(validator(minimum(value = "0")))]
    pub price: f64,
    /// Optional product description
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateProductRequest {
    /// Accepted for payload compatibility and always ignored; the
    /// identifier cannot be changed through an update.
    #[oai(skip_serializing_if_is_none)]
    pub id: Option<i64>,
    /// Product name (cannot be empty)
    #[oai(validator(min_length = 1), skip_serializing_if_is_none)]
    pub name: Option<String>,
    /// Product price (non-negative)
    #[oai(validator(minimum(value = "0")), skip_serializing_if_is_none)]
    pub price: Option<f64>,
    /// Product description
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// Availability flag
    #[oai(skip_serializing_if_is_none)]
    pub available: Option<bool>,
}

impl UpdateProductRequest {
    /// Builds the domain change set, dropping any id in the payload.
    pub fn into_changes(self) -> UpdateProduct {
        UpdateProduct {
            name: self.name,
            price: self.price,
            description: self.description,
            available: self.available,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: i64,
    /// Product name
    pub name: String,
    /// Product price
    pub price: f64,
    /// Product description
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// Availability flag; false once the product has been removed
    pub available: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            description: product.description,
            available: product.available,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

/// Pagination envelope returned alongside every product page.
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct PageMetaResponse {
    /// Count of available products
    pub total: i64,
    /// Requested page (1-based)
    pub page: i64,
    /// Index of the last non-empty page
    pub last_page: i64,
}

impl From<PageMeta> for PageMetaResponse {
    fn from(meta: PageMeta) -> Self {
        Self {
            total: meta.total,
            page: meta.page,
            last_page: meta.last_page,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductPageResponse {
    /// Products on the requested page
    pub data: Vec<ProductResponse>,
    /// Pagination metadata
    pub meta: PageMetaResponse,
}

impl From<ProductPage> for ProductPageResponse {
    fn from(page: ProductPage) -> Self {
        Self {
            data: page.data.into_iter().map(|p| p.into()).collect(),
            meta: page.meta.into(),
        }
    }
}
