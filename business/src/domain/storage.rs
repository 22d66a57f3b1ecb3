use async_trait::async_trait;

use super::errors::StorageError;

/// Port for named binary objects kept under logical, `/`-separated paths.
///
/// Paths are relative to the store root, e.g. `product/image/abc.png`.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Check whether an object exists at `path`.
    async fn exists(&self, path: &str) -> Result<bool, StorageError>;

    /// Remove the object at `path`.
    async fn delete(&self, path: &str) -> Result<(), StorageError>;

    /// Store `data` as `directory/name`, replacing any previous object.
    /// Returns the full path of the stored object.
    async fn put_as(
        &self,
        directory: &str,
        name: &str,
        data: &[u8],
    ) -> Result<String, StorageError>;
}
