//! In-memory blob store

use crate::error::{Result, ResumeMatcherError};
use crate::store::{validate_name, BlobStore, StoredDocument};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    blobs: Mutex<BTreeMap<String, (Vec<u8>, DateTime<Utc>)>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn blobs(&self) -> MutexGuard<'_, BTreeMap<String, (Vec<u8>, DateTime<Utc>)>> {
        self.blobs.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl BlobStore for MemoryBlobStore {
    async fn put(&self, name: &str, bytes: &[u8]) -> Result<()> {
        validate_name(name)?;
        self.blobs().insert(name.to_string(), (bytes.to_vec(), Utc::now()));
        Ok(())
    }

    async fn list(&self) -> Result<Vec<StoredDocument>> {
        Ok(self
            .blobs()
            .iter()
            .map(|(name, (bytes, modified))| StoredDocument {
                name: name.clone(),
                size_bytes: bytes.len() as u64,
                modified: Some(*modified),
            })
            .collect())
    }

    async fn read(&self, name: &str) -> Result<Vec<u8>> {
        self.blobs()
            .get(name)
            .map(|(bytes, _)| bytes.clone())
            .ok_or_else(|| ResumeMatcherError::NotFound(name.to_string()))
    }

    async fn delete(&self, name: &str) -> Result<()> {
        self.blobs()
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| ResumeMatcherError::NotFound(name.to_string()))
    }
}
