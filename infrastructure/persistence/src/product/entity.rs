use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::product::model::Product;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
    pub available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product {
            id: self.id,
            name: self.name,
            price: self.price,
            description: self.description,
            available: self.available,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_row_fields_into_domain_product() {
        let now = Utc::now();
        let entity = ProductEntity {
            id: 4,
            name: "Olive Oil".to_string(),
            price: 8.75,
            description: Some("Extra virgin, 1L".to_string()),
            available: false,
            created_at: now,
            updated_at: now,
        };

        let product = entity.into_domain();

        assert_eq!(product.id, 4);
        assert_eq!(product.name, "Olive Oil");
        assert_eq!(product.price, 8.75);
        assert_eq!(product.description.as_deref(), Some("Extra virgin, 1L"));
        assert!(!product.available);
    }
}
