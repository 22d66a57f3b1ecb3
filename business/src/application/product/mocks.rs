use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use mockall::mock;
use uuid::Uuid;

use crate::domain::errors::{RepositoryError, StorageError};
use crate::domain::logger::Logger;
use crate::domain::product::model::{Product, ProductSummary};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::value_objects::ImageUpload;
use crate::domain::storage::BlobStore;

mock! {
    pub ProductRepo {}

    #[async_trait]
    impl ProductRepository for ProductRepo {
        async fn get_all(&self) -> Result<Vec<ProductSummary>, RepositoryError>;
        async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, RepositoryError>;
        async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
        async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub Blobs {}

    #[async_trait]
    impl BlobStore for Blobs {
        async fn exists(&self, path: &str) -> Result<bool, StorageError>;
        async fn delete(&self, path: &str) -> Result<(), StorageError>;
        async fn put_as(&self, directory: &str, name: &str, data: &[u8]) -> Result<String, StorageError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

/// Leading bytes of a PNG file.
pub const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0x0D];

pub fn png_upload() -> ImageUpload {
    ImageUpload {
        file_name: Some("shoe.png".to_string()),
        content_type: Some("image/png".to_string()),
        data: PNG_BYTES.to_vec(),
    }
}

pub fn stored_product(id: Uuid, image: Option<&str>) -> Product {
    let now = Utc::now();
    Product::from_repository(
        id,
        "Red Shoes".to_string(),
        "Comfortable running shoes".to_string(),
        image.map(str::to_string),
        now,
        now,
    )
}

/// Blob store mock that records the name of every stored object.
pub fn recording_put(blobs: &mut MockBlobs) -> Arc<Mutex<Vec<String>>> {
    let names = Arc::new(Mutex::new(Vec::new()));
    let sink = names.clone();
    blobs.expect_put_as().returning(move |directory, name, _| {
        sink.lock().unwrap().push(name.to_string());
        Ok(format!("{}/{}", directory, name))
    });
    names
}
