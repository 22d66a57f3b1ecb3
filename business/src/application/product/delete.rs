use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use crate::domain::storage::BlobStore;

pub struct DeleteProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub blob_store: Arc<dyn BlobStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError> {
        self.logger
            .info(&format!("Deleting product: {}", params.id));

        let product = self
            .repository
            .find_by_id(params.id)
            .await?
            .ok_or(ProductError::NotFound)?;

        // A missing blob is fine, only the record must go.
        if let Some(path) = product.image_path() {
            if self.blob_store.exists(&path).await? {
                self.blob_store.delete(&path).await?;
                self.logger.debug(&format!("Removed product image {}", path));
            } else {
                self.logger
                    .warn(&format!("Product image {} was already gone", path));
            }
        }

        self.repository
            .delete(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        self.logger.info(&format!("Product deleted: {}", params.id));
        Ok(())
    }
}
