use crate::core::Storage;
use crate::utils::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn full_path(&self, path: &str) -> PathBuf {
        self.base_path.join(path)
    }
}

impl Storage for LocalStorage {
    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.full_path(path);

        if let Some(parent) = full_path.parent() {
            if parent != Path::new("") {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(full_path, data)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path());

        storage
            .write_file("articles/blackassign0001.txt", b"Title\nBody")
            .await
            .unwrap();

        let data = fs::read(dir.path().join("articles/blackassign0001.txt")).unwrap();
        assert_eq!(data, b"Title\nBody");
        assert!(dir.path().join("articles").is_dir());
    }

    #[tokio::test]
    async fn test_write_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path());

        storage.write_file("out.csv", b"first run").await.unwrap();
        storage.write_file("out.csv", b"second").await.unwrap();

        assert_eq!(fs::read(storage.full_path("out.csv")).unwrap(), b"second");
    }

    #[tokio::test]
    async fn test_write_into_file_path_fails() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("articles"), b"not a directory").unwrap();
        let storage = LocalStorage::new(dir.path());

        let err = storage.write_file("articles/1.txt", b"x").await.unwrap_err();
        assert!(matches!(err, crate::AnalyzerError::IoError(_)));
    }
}
