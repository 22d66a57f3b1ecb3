/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.database_error")]
    DatabaseError,
}

/// Blob storage errors for domain layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage.invalid_path")]
    InvalidPath,
    #[error("storage.read_failed")]
    ReadFailed,
    #[error("storage.write_failed")]
    WriteFailed,
    #[error("storage.delete_failed")]
    DeleteFailed,
}
