//! Directory-backed blob store: one file per document

use crate::error::{Result, ResumeMatcherError};
use crate::store::{validate_name, BlobStore, StoredDocument};
use chrono::{DateTime, Utc};
use log::{debug, info};
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;

#[derive(Debug, Clone)]
pub struct FsBlobStore {
    root: PathBuf,
}

impl FsBlobStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, name: &str) -> Result<PathBuf> {
        validate_name(name)?;
        Ok(self.root.join(name))
    }

    fn not_found(name: &str, err: std::io::Error) -> ResumeMatcherError {
        if err.kind() == ErrorKind::NotFound {
            ResumeMatcherError::NotFound(name.to_string())
        } else {
            ResumeMatcherError::Io(err)
        }
    }
}

impl BlobStore for FsBlobStore {
    async fn put(&self, name: &str, bytes: &[u8]) -> Result<()> {
        let path = self.path_for(name)?;
        fs::create_dir_all(&self.root).await?;
        fs::write(&path, bytes).await?;
        info!("Stored {} ({} bytes) in {}", name, bytes.len(), self.root.display());
        Ok(())
    }

    async fn list(&self) -> Result<Vec<StoredDocument>> {
        let mut entries = match fs::read_dir(&self.root).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Upload directory {} does not exist yet", self.root.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let mut documents = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let metadata = match entry.metadata().await {
                Ok(metadata) => metadata,
                // removed between read_dir and stat
                Err(e) if e.kind() == ErrorKind::NotFound => continue,
                Err(e) => return Err(e.into()),
            };
            if !metadata.is_file() {
                continue;
            }

            documents.push(StoredDocument {
                name: entry.file_name().to_string_lossy().to_string(),
                size_bytes: metadata.len(),
                modified: metadata.modified().ok().map(DateTime::<Utc>::from),
            });
        }

        documents.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(documents)
    }

    async fn read(&self, name: &str) -> Result<Vec<u8>> {
        let path = self.path_for(name)?;
        fs::read(&path).await.map_err(|e| Self::not_found(name, e))
    }

    async fn delete(&self, name: &str) -> Result<()> {
        let path = self.path_for(name)?;
        fs::remove_file(&path).await.map_err(|e| Self::not_found(name, e))?;
        info!("Deleted {} from {}", name, self.root.display());
        Ok(())
    }
}
