use chrono::{DateTime, Utc};

use crate::domain::shared::pagination::Pagination;

/// A catalog product. Products are never physically deleted; removal only
/// flips `available` to false, and unavailable products are invisible to
/// every read that filters on availability.
#[derive(Debug, Clone)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
    pub available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields for a product that does not exist yet. The store assigns the
/// identifier and defaults `available` to true.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
}

/// Partial change set for an existing product. The identifier is not part
/// of this type: it cannot be changed through an update.
#[derive(Debug, Clone, Default)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub available: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct PageMeta {
    pub total: i64,
    pub page: i64,
    pub last_page: i64,
}

impl PageMeta {
    pub fn new(total: i64, pagination: &Pagination) -> Self {
        Self {
            total,
            page: pagination.page,
            last_page: pagination.last_page(total),
        }
    }
}

/// One page of available products plus the pagination envelope.
#[derive(Debug, Clone)]
pub struct ProductPage {
    pub data: Vec<Product>,
    pub meta: PageMeta,
}
