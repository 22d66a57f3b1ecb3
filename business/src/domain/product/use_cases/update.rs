use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::value_objects::ImageUpload;

pub struct UpdateProductParams {
    pub id: Uuid,
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<ImageUpload>,
}

/// Changes are only applied when a replacement image is supplied.
/// `Ok(None)` means nothing was touched.
#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<Option<Product>, ProductError>;
}
