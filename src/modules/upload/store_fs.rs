use std::path::PathBuf;

use crate::api::error;
use crate::modules::upload::store::FileStore;

#[derive(Clone)]
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait::async_trait]
impl FileStore for FsStore {
    async fn save(&self, filename: &str, bytes: &[u8]) -> Result<PathBuf, error::SystemError> {
        // Create upload directory if it doesn't exist
        tokio::fs::create_dir_all(&self.root).await?;

        let file_path = self.root.join(filename);
        tokio::fs::write(&file_path, bytes).await?;

        Ok(file_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_save_writes_bytes_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsStore::new(dir.path());

        let path = store.save("doc.pdf", b"%PDF-1.4 content").await.unwrap();

        assert_eq!(path, dir.path().join("doc.pdf"));
        let on_disk = std::fs::read(&path).unwrap();
        assert_eq!(on_disk, b"%PDF-1.4 content");
    }

    #[actix_web::test]
    async fn test_save_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested").join("uploads");
        let store = FsStore::new(&nested);

        let path = store.save("doc.pdf", b"data").await.unwrap();

        assert!(path.starts_with(&nested));
        assert!(path.exists());
    }
}
