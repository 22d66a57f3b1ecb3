use std::env;
use std::path::PathBuf;

const DEFAULT_MAX_UPLOAD_BYTES: usize = 2 * 1024 * 1024;

/// Where product images live and how they are exposed.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub root: PathBuf,
    pub public_path: String,
    pub max_upload_bytes: usize,
}

impl StorageConfig {
    /// Load storage configuration from environment variables
    ///
    /// Environment variables:
    /// - STORAGE_ROOT: Directory holding public blobs (default: "storage/app/public")
    /// - STORAGE_PUBLIC_PATH: URL prefix the directory is served under (default: "/storage")
    /// - MAX_UPLOAD_BYTES: Largest accepted request body (default: 2 MiB)
    pub fn from_env() -> Self {
        Self::from_values(
            env::var("STORAGE_ROOT").ok(),
            env::var("STORAGE_PUBLIC_PATH").ok(),
            env::var("MAX_UPLOAD_BYTES").ok(),
        )
    }

    fn from_values(
        root: Option<String>,
        public_path: Option<String>,
        max_upload_bytes: Option<String>,
    ) -> Self {
        let public_path = public_path.unwrap_or_else(|| "/storage".to_string());
        let public_path = format!("/{}", public_path.trim_matches('/'));

        Self {
            root: PathBuf::from(root.unwrap_or_else(|| "storage/app/public".to_string())),
            public_path,
            max_upload_bytes: max_upload_bytes
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),
        }
    }
}
