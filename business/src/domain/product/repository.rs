use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::{Product, ProductSummary};

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Projection of every product, oldest first.
    async fn get_all(&self) -> Result<Vec<ProductSummary>, RepositoryError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, RepositoryError>;
    /// Inserts the product or overwrites the stored record with the same id.
    async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
