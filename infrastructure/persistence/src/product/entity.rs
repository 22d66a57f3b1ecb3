use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::product::model::{Product, ProductSummary};

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            self.id,
            self.title,
            self.description,
            self.image,
            self.created_at,
            self.updated_at,
        )
    }
}

/// Row shape of the listing projection.
#[derive(Debug, FromRow)]
pub struct ProductSummaryEntity {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
}

impl ProductSummaryEntity {
    pub fn into_domain(self) -> ProductSummary {
        ProductSummary {
            id: self.id,
            title: self.title,
            description: self.description,
            image: self.image.filter(|name| !name.is_empty()),
        }
    }
}
