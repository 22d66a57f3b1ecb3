use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use crate::domain::product::validation::ProductInput;
use crate::domain::product::value_objects::{ImageName, PRODUCT_IMAGE_DIR};
use crate::domain::storage::BlobStore;

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub blob_store: Arc<dyn BlobStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        let validated = ProductInput {
            title: params.title,
            description: params.description,
            image: params.image,
        }
        .validate_new()?;

        self.logger
            .info(&format!("Creating product: {}", validated.details.title()));

        let file = validated.image;
        let image = ImageName::generate(file.extension());
        let product = Product::new(NewProductProps {
            details: validated.details,
            image: image.clone(),
        });

        let path = self
            .blob_store
            .put_as(PRODUCT_IMAGE_DIR, image.as_str(), file.data())
            .await?;
        self.logger.debug(&format!("Stored product image at {}", path));

        if let Err(e) = self.repository.save(&product).await {
            self.logger.error(&format!(
                "Product record not saved, image {} has no owner: {}",
                path, e
            ));
            return Err(e.into());
        }

        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::product::mocks::{
        MockBlobs, MockProductRepo, PNG_BYTES, mock_logger, png_upload, recording_put,
    };
    use crate::domain::errors::{RepositoryError, StorageError};
    use crate::domain::product::validation::{IMAGE, MIN_LENGTH, REQUIRED};
    use crate::domain::product::value_objects::ImageUpload;

    fn params(title: &str, description: &str, image: Option<ImageUpload>) -> CreateProductParams {
        CreateProductParams {
            title: Some(title.to_string()),
            description: Some(description.to_string()),
            image,
        }
    }

    #[tokio::test]
    async fn should_store_image_under_the_name_persisted_on_the_record() {
        let mut mock_blobs = MockBlobs::new();
        let stored = recording_put(&mut mock_blobs);
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_save().times(1).returning(|_| Ok(()));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            blob_store: Arc::new(mock_blobs),
            logger: mock_logger(),
        };

        let product = use_case
            .execute(params(
                "Red Shoes",
                "Comfortable running shoes",
                Some(png_upload()),
            ))
            .await
            .unwrap();

        let stored = stored.lock().unwrap();
        assert_eq!(stored.len(), 1);
        assert!(stored[0].ends_with(".png"));
        assert_eq!(product.image.as_deref(), Some(stored[0].as_str()));
        assert_eq!(product.title, "Red Shoes");
        assert_eq!(product.description, "Comfortable running shoes");
    }

    #[tokio::test]
    async fn should_put_blob_in_product_image_directory() {
        let mut mock_blobs = MockBlobs::new();
        mock_blobs
            .expect_put_as()
            .withf(|directory, _, data| directory == "product/image" && data == PNG_BYTES)
            .times(1)
            .returning(|directory, name, _| Ok(format!("{}/{}", directory, name)));
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_save().returning(|_| Ok(()));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            blob_store: Arc::new(mock_blobs),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params(
                "Red Shoes",
                "Comfortable running shoes",
                Some(png_upload()),
            ))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_reject_short_fields_without_touching_stores() {
        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(MockProductRepo::new()),
            blob_store: Arc::new(MockBlobs::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params("Shoe", "Nice", Some(png_upload())))
            .await;

        match result {
            Err(ProductError::Validation(errors)) => {
                assert_eq!(
                    errors.messages_for("title"),
                    Some(&[MIN_LENGTH.to_string()][..])
                );
                assert_eq!(
                    errors.messages_for("description"),
                    Some(&[MIN_LENGTH.to_string()][..])
                );
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn should_require_image() {
        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(MockProductRepo::new()),
            blob_store: Arc::new(MockBlobs::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params("Red Shoes", "Comfortable running shoes", None))
            .await;

        match result {
            Err(ProductError::Validation(errors)) => {
                assert_eq!(errors.messages_for("image"), Some(&[REQUIRED.to_string()][..]));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn should_propagate_storage_failure_without_saving_record() {
        let mut mock_blobs = MockBlobs::new();
        mock_blobs
            .expect_put_as()
            .returning(|_, _, _| Err(StorageError::WriteFailed));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(MockProductRepo::new()),
            blob_store: Arc::new(mock_blobs),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params(
                "Red Shoes",
                "Comfortable running shoes",
                Some(png_upload()),
            ))
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::Storage(StorageError::WriteFailed)
        ));
    }

    #[tokio::test]
    async fn should_propagate_repository_failure_after_blob_is_stored() {
        let mut mock_blobs = MockBlobs::new();
        let stored = recording_put(&mut mock_blobs);
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_save()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            blob_store: Arc::new(mock_blobs),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params(
                "Red Shoes",
                "Comfortable running shoes",
                Some(png_upload()),
            ))
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::Repository(RepositoryError::DatabaseError)
        ));
        // No compensation: the blob stays behind.
        assert_eq!(stored.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_reject_text_file_named_as_image() {
        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(MockProductRepo::new()),
            blob_store: Arc::new(MockBlobs::new()),
            logger: mock_logger(),
        };
        let fake = ImageUpload {
            data: b"this is plainly a text file, not a PNG".to_vec(),
            ..png_upload()
        };

        let result = use_case
            .execute(params("Red Shoes", "Comfortable running shoes", Some(fake)))
            .await;

        match result {
            Err(ProductError::Validation(errors)) => {
                assert_eq!(errors.messages_for("image"), Some(&[IMAGE.to_string()][..]));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn should_save_trimmed_fields() {
        let mut mock_blobs = MockBlobs::new();
        recording_put(&mut mock_blobs);
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_save()
            .withf(|product| {
                product.title == "Red Shoes" && product.description == "Comfortable running shoes"
            })
            .times(1)
            .returning(|_| Ok(()));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            blob_store: Arc::new(mock_blobs),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params(
                "  Red Shoes  ",
                " Comfortable running shoes ",
                Some(png_upload()),
            ))
            .await;

        assert!(result.is_ok());
    }
}
