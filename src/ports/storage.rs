//! Collaborator contract for uploaded-file storage.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FileStoreError {
    #[error("file store error: {0}")]
    Backend(#[from] object_store::Error),

    #[error("invalid upload root: {0}")]
    InvalidRoot(String),
}

/// A stored upload: the storage key plus a content hash and size.
#[derive(Debug, Clone)]
pub struct StoredFile {
    pub key: String,
    pub etag: String,
    pub size: u64,
}

/// Stores uploaded files and maps storage keys to public URLs.
#[async_trait]
pub trait FileStore: Send + Sync + 'static {
    async fn save(
        &self,
        file_name: &str,
        content_type: Option<&str>,
        data: Bytes,
    ) -> Result<StoredFile, FileStoreError>;

    /// `false` when the key did not exist.
    async fn delete(&self, key: &str) -> Result<bool, FileStoreError>;

    fn public_url(&self, key: &str) -> String;
}
