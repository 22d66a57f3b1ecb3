use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;

use business::domain::errors::StorageError;
use business::domain::storage::BlobStore;

/// Blob store rooted at a local directory, e.g. `storage/app/public`.
///
/// Logical paths are `/`-separated and always resolved below the root;
/// absolute paths and `..` segments are refused.
#[derive(Debug, Clone)]
pub struct LocalBlobStore {
    root: PathBuf,
}

impl LocalBlobStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Maps a logical path onto the file system.
    fn resolve(&self, logical: &str) -> Result<PathBuf, StorageError> {
        let trimmed = logical.trim_matches('/');
        if trimmed.is_empty() {
            return Err(StorageError::InvalidPath);
        }

        let mut resolved = self.root.clone();
        for segment in trimmed.split('/') {
            let mut components = Path::new(segment).components();
            match (components.next(), components.next()) {
                (Some(Component::Normal(part)), None) => resolved.push(part),
                _ => return Err(StorageError::InvalidPath),
            }
        }
        Ok(resolved)
    }
}

#[async_trait]
impl BlobStore for LocalBlobStore {
    async fn exists(&self, path: &str) -> Result<bool, StorageError> {
        let file = self.resolve(path)?;
        match tokio::fs::metadata(&file).await {
            Ok(metadata) => Ok(metadata.is_file()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => {
                tracing::error!("Could not stat blob {}: {}", file.display(), e);
                Err(StorageError::ReadFailed)
            }
        }
    }

    async fn delete(&self, path: &str) -> Result<(), StorageError> {
        let file = self.resolve(path)?;
        match tokio::fs::remove_file(&file).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("Blob {} already absent", file.display());
                Ok(())
            }
            Err(e) => {
                tracing::error!("Could not delete blob {}: {}", file.display(), e);
                Err(StorageError::DeleteFailed)
            }
        }
    }

    async fn put_as(
        &self,
        directory: &str,
        name: &str,
        data: &[u8],
    ) -> Result<String, StorageError> {
        if name.contains('/') {
            return Err(StorageError::InvalidPath);
        }
        let logical = format!("{}/{}", directory.trim_matches('/'), name);
        let file = self.resolve(&logical)?;

        if let Some(parent) = file.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                tracing::error!("Could not create {}: {}", parent.display(), e);
                StorageError::WriteFailed
            })?;
        }

        tokio::fs::write(&file, data).await.map_err(|e| {
            tracing::error!("Could not write blob {}: {}", file.display(), e);
            StorageError::WriteFailed
        })?;

        tracing::debug!("Stored {} bytes at {}", data.len(), file.display());
        Ok(logical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (TempDir, LocalBlobStore) {
        let dir = TempDir::new().unwrap();
        let store = LocalBlobStore::new(dir.path());
        (dir, store)
    }

    #[tokio::test]
    async fn should_put_blob_under_directory() {
        let (dir, store) = store();

        let path = store
            .put_as("product/image", "abc123.png", b"png-bytes")
            .await
            .unwrap();

        assert_eq!(path, "product/image/abc123.png");
        let written = std::fs::read(dir.path().join("product").join("image").join("abc123.png"))
            .unwrap();
        assert_eq!(written, b"png-bytes");
    }

    #[tokio::test]
    async fn should_report_existence() {
        let (_dir, store) = store();

        assert!(!store.exists("product/image/abc123.png").await.unwrap());
        store
            .put_as("product/image", "abc123.png", b"png-bytes")
            .await
            .unwrap();
        assert!(store.exists("product/image/abc123.png").await.unwrap());
    }

    #[tokio::test]
    async fn should_not_treat_directory_as_blob() {
        let (_dir, store) = store();
        store
            .put_as("product/image", "abc123.png", b"png-bytes")
            .await
            .unwrap();

        assert!(!store.exists("product/image").await.unwrap());
    }

    #[tokio::test]
    async fn should_delete_blob() {
        let (_dir, store) = store();
        store
            .put_as("product/image", "abc123.png", b"png-bytes")
            .await
            .unwrap();

        store.delete("product/image/abc123.png").await.unwrap();

        assert!(!store.exists("product/image/abc123.png").await.unwrap());
    }

    #[tokio::test]
    async fn should_ignore_delete_of_missing_blob() {
        let (_dir, store) = store();

        assert!(store.delete("product/image/missing.png").await.is_ok());
    }

    #[tokio::test]
    async fn should_overwrite_existing_blob() {
        let (dir, store) = store();
        store.put_as("product/image", "a.png", b"one").await.unwrap();
        store.put_as("product/image", "a.png", b"two").await.unwrap();

        let written = std::fs::read(dir.path().join("product/image/a.png")).unwrap();
        assert_eq!(written, b"two");
    }

    #[tokio::test]
    async fn should_refuse_paths_escaping_root() {
        let (_dir, store) = store();

        assert!(matches!(
            store.exists("../secret.txt").await,
            Err(StorageError::InvalidPath)
        ));
        assert!(matches!(
            store.delete("product/../../etc/passwd").await,
            Err(StorageError::InvalidPath)
        ));
        assert!(matches!(
            store.put_as("product/image", "../evil.png", b"x").await,
            Err(StorageError::InvalidPath)
        ));
        assert!(matches!(store.exists("").await, Err(StorageError::InvalidPath)));
    }
}
