use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use crate::domain::product::validation::ProductInput;
use crate::domain::product::value_objects::{ImageName, PRODUCT_IMAGE_DIR};
use crate::domain::storage::BlobStore;

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub blob_store: Arc<dyn BlobStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Option<Product>, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        let mut product = self
            .repository
            .find_by_id(params.id)
            .await?
            .ok_or(ProductError::NotFound)?;

        let changes = ProductInput {
            title: params.title,
            description: params.description,
            image: params.image,
        }
        .validate_changes()?;

        let Some(file) = changes.image else {
            self.logger.warn(&format!(
                "No image supplied for product {}, nothing updated",
                params.id
            ));
            return Ok(None);
        };

        if let Some(old_path) = product.image_path()
            && self.blob_store.exists(&old_path).await?
        {
            self.blob_store.delete(&old_path).await?;
            self.logger
                .debug(&format!("Removed previous image {}", old_path));
        }

        product.update_details(changes.details);

        let image = ImageName::generate(file.extension());
        let path = self
            .blob_store
            .put_as(PRODUCT_IMAGE_DIR, image.as_str(), file.data())
            .await?;
        product.replace_image(image);

        if let Err(e) = self.repository.save(&product).await {
            self.logger.error(&format!(
                "Product {} not saved, image {} has no owner: {}",
                product.id, path, e
            ));
            return Err(e.into());
        }

        self.logger.info(&format!("Product updated: {}", product.id));
        Ok(Some(product))
    }
}
