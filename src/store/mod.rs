//! Blob storage for uploaded documents

pub mod fs;
pub mod memory;

pub use fs::FsBlobStore;
pub use memory::MemoryBlobStore;

use crate::error::{Result, ResumeMatcherError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::future::Future;

/// A stored document as reported by a listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredDocument {
    pub name: String,
    pub size_bytes: u64,
    pub modified: Option<DateTime<Utc>>,
}

/// Named byte storage. Missing names are reported as `NotFound`.
pub trait BlobStore: Send + Sync {
    /// Store `bytes` under `name`, replacing any existing document
    fn put(&self, name: &str, bytes: &[u8]) -> impl Future<Output = Result<()>> + Send;

    /// Stored documents sorted by name
    fn list(&self) -> impl Future<Output = Result<Vec<StoredDocument>>> + Send;

    fn read(&self, name: &str) -> impl Future<Output = Result<Vec<u8>>> + Send;

    fn delete(&self, name: &str) -> impl Future<Output = Result<()>> + Send;
}

/// Percent-decode a document name received in encoded form (`My%20CV.pdf`).
/// Names that do not decode to valid UTF-8 are returned unchanged.
pub fn decode_name(name: &str) -> String {
    urlencoding::decode(name)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| name.to_string())
}

/// Reject names that could escape the store or are not usable as a file name
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() || name == "." || name == ".." {
        return Err(ResumeMatcherError::InvalidInput(format!(
            "Invalid document name: '{}'",
            name
        )));
    }
    if name.contains(['/', '\\', '\0']) {
        return Err(ResumeMatcherError::InvalidInput(format!(
            "Document name must not contain path separators: '{}'",
            name
        )));
    }
    Ok(())
}
