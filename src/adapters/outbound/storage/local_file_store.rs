use async_trait::async_trait;
use bytes::Bytes;
use chrono::{Datelike, Utc};
use object_store::{local::LocalFileSystem, path::Path as StorePath, ObjectStore};
use std::sync::Arc;
use uuid::Uuid;

use crate::ports::storage::{FileStore, FileStoreError, StoredFile};

/// Upload store over a local directory, wrapped in the `object_store`
/// crate's `LocalFileSystem`. Keys are date-partitioned
/// (`uploads/yyyy/mm/dd/<uuid><ext>`) so a day's uploads stay together and
/// names never collide with client-supplied ones.
pub struct LocalFileStore {
    store: Arc<LocalFileSystem>,
    public_base_url: String,
}

impl LocalFileStore {
    pub fn new(
        root: impl AsRef<std::path::Path>,
        public_base_url: impl Into<String>,
    ) -> Result<Self, FileStoreError> {
        let root = root.as_ref();
        std::fs::create_dir_all(root)
            .map_err(|e| FileStoreError::InvalidRoot(format!("{}: {e}", root.display())))?;
        let store = LocalFileSystem::new_with_prefix(root)?;
        Ok(Self {
            store: Arc::new(store),
            public_base_url: public_base_url.into(),
        })
    }

    fn build_key(file_name: &str) -> String {
        let now = Utc::now();
        let ext = std::path::Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!(".{e}"))
            .unwrap_or_default();
        format!(
            "uploads/{:04}/{:02}/{:02}/{}{}",
            now.year(),
            now.month(),
            now.day(),
            Uuid::new_v4().simple(),
            ext
        )
    }
}

#[async_trait]
impl FileStore for LocalFileStore {
    async fn save(
        &self,
        file_name: &str,
        _content_type: Option<&str>,
        data: Bytes,
    ) -> Result<StoredFile, FileStoreError> {
        let key = Self::build_key(file_name);
        let etag = format!("{:x}", md5::compute(&data));
        let size = data.len() as u64;

        self.store.put(&StorePath::from(key.as_str()), data.into()).await?;

        Ok(StoredFile { key, etag, size })
    }

    async fn delete(&self, key: &str) -> Result<bool, FileStoreError> {
        match self.store.delete(&StorePath::from(key)).await {
            Ok(()) => Ok(true),
            Err(object_store::Error::NotFound { .. }) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}/{}", self.public_base_url.trim_end_matches('/'), key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_date_partitioned_and_unique() {
        let a = LocalFileStore::build_key("house.jpg");
        let b = LocalFileStore::build_key("house.jpg");
        assert!(a.starts_with("uploads/"));
        assert!(a.ends_with(".jpg"));
        assert_ne!(a, b);
        assert!(LocalFileStore::build_key("noext").ends_with(|c: char| c.is_ascii_alphanumeric()));
    }

    #[tokio::test]
    async fn save_and_delete_round_trip() {
        let root = std::env::temp_dir().join(format!("realty-files-{}", Uuid::new_v4()));
        let store = LocalFileStore::new(&root, "http://localhost:8080/files").unwrap();

        let saved = store
            .save("front.jpg", Some("image/jpeg"), Bytes::from_static(b"jpegdata"))
            .await
            .unwrap();
        assert_eq!(saved.size, 8);
        assert_eq!(
            store.public_url(&saved.key),
            format!("http://localhost:8080/files/{}", saved.key)
        );

        assert!(store.delete(&saved.key).await.unwrap());
        assert!(!store.delete(&saved.key).await.unwrap());

        std::fs::remove_dir_all(&root).ok();
    }
}
