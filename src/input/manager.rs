//! Input manager for handling different file types

use crate::error::{Result, ResumeMatcherError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{PdfExtractor, PlainTextExtractor, TextExtractor, WordExtractor};
use log::{debug, warn};
use std::io::Read;
use std::path::Path;

/// Routes a named document to the extractor for its format.
///
/// Nothing is cached: every call re-extracts from the bytes it is given.
#[derive(Debug, Default, Clone, Copy)]
pub struct InputManager;

impl InputManager {
    pub fn new() -> Self {
        Self
    }

    /// Extract plain text from `bytes`, choosing the format from `name`.
    ///
    /// Corrupt PDF or Word content degrades to empty text instead of failing.
    pub fn extract(&self, name: &str, bytes: &[u8]) -> String {
        let file_type = FileType::from_name(name);
        debug!("Extracting {:?} text from: {}", file_type, name);

        let result = match file_type {
            FileType::Pdf => PdfExtractor.extract(bytes),
            FileType::Word => WordExtractor.extract(bytes),
            FileType::Text => PlainTextExtractor.extract(bytes),
        };

        match result {
            Ok(text) => text,
            Err(e) => {
                warn!("Could not extract text from '{}': {}", name, e);
                String::new()
            }
        }
    }

    /// Read the whole source, then extract. Only IO errors are reported.
    pub fn extract_from_reader<R: Read>(&self, name: &str, mut reader: R) -> Result<String> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Ok(self.extract(name, &bytes))
    }

    /// Extract text from a file on disk, e.g. a job description
    pub async fn extract_file(&self, path: &Path) -> Result<String> {
        let bytes = tokio::fs::read(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ResumeMatcherError::NotFound(path.display().to_string())
            } else {
                ResumeMatcherError::Io(e)
            }
        })?;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        Ok(self.extract(&name, &bytes))
    }
}
