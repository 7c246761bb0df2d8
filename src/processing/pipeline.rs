//! Coordinates the blob store, text extraction and skill scoring

use crate::config::Config;
use crate::error::{Result, ResumeMatcherError};
use crate::input::InputManager;
use crate::output::report::{DeleteReceipt, JobMatchReport, ResumeView, SkippedDocument, UploadReceipt};
use crate::processing::scorer::JobScorer;
use crate::processing::skill_matcher::{display_skills, SkillMatcher};
use crate::processing::vocabulary::SkillVocabulary;
use crate::store::{decode_name, BlobStore, FsBlobStore, StoredDocument};
use log::{debug, info, warn};
use std::path::Path;

pub struct ResumePipeline<S> {
    store: S,
    input: InputManager,
    vocabulary: SkillVocabulary,
}

impl ResumePipeline<FsBlobStore> {
    /// Pipeline over the configured upload directory and vocabulary
    pub fn from_config(config: &Config) -> Result<Self> {
        let vocabulary = SkillVocabulary::new(config.skills.vocabulary.iter().cloned())?;
        Ok(Self::new(FsBlobStore::new(&config.storage.uploads_dir), vocabulary))
    }
}

impl<S: BlobStore> ResumePipeline<S> {
    pub fn new(store: S, vocabulary: SkillVocabulary) -> Self {
        Self {
            store,
            input: InputManager::new(),
            vocabulary,
        }
    }

    pub fn input(&self) -> &InputManager {
        &self.input
    }

    /// Store `bytes` under the percent-decoded `name`, the form `list` reports
    pub async fn upload(&self, name: &str, bytes: &[u8]) -> Result<UploadReceipt> {
        let name = decode_name(name);
        self.store.put(&name, bytes).await?;
        Ok(UploadReceipt::new(&name))
    }

    /// Upload a local file, stored under `name` or the file's own name
    pub async fn upload_file(&self, path: &Path, name: Option<&str>) -> Result<UploadReceipt> {
        let name = match name {
            Some(name) => name.to_string(),
            None => path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .ok_or_else(|| ResumeMatcherError::InvalidInput(format!("Not a file: {}", path.display())))?,
        };

        let bytes = tokio::fs::read(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ResumeMatcherError::NotFound(path.display().to_string())
            } else {
                ResumeMatcherError::Io(e)
            }
        })?;

        self.upload(&name, &bytes).await
    }

    pub async fn list(&self) -> Result<Vec<StoredDocument>> {
        self.store.list().await
    }

    /// Extracted content and detected skills of one stored resume
    pub async fn view(&self, name: &str) -> Result<ResumeView> {
        let (name, bytes) = self.read_named(name).await?;

        let content = self.input.extract(&name, &bytes);
        let skills = SkillMatcher::new(&self.vocabulary).match_skills(&content);
        debug!("{}: {} characters, {} skills", name, content.len(), skills.len());

        Ok(ResumeView {
            name,
            content,
            skills: display_skills(skills),
        })
    }

    pub async fn delete(&self, name: &str) -> Result<DeleteReceipt> {
        let decoded = decode_name(name);
        let result = self.store.delete(&decoded).await;
        let name = match result {
            Err(e) if e.is_not_found() && decoded != name => {
                // stored literally, e.g. before uploads were decoded
                self.store.delete(name).await?;
                name.to_string()
            }
            other => other.map(|_| decoded)?,
        };
        Ok(DeleteReceipt::new(&name))
    }

    /// Read by decoded name, falling back to the name exactly as given when
    /// only that form exists in the store
    async fn read_named(&self, name: &str) -> Result<(String, Vec<u8>)> {
        let decoded = decode_name(name);
        let result = self.store.read(&decoded).await;
        match result {
            Ok(bytes) => Ok((decoded, bytes)),
            Err(e) if e.is_not_found() && decoded != name => {
                debug!("{} not found, trying {} as stored", decoded, name);
                let bytes = self.store.read(name).await?;
                Ok((name.to_string(), bytes))
            }
            Err(e) => Err(e),
        }
    }

    /// Rank every stored resume against `description`.
    ///
    /// A listed document that can no longer be read is left out of the ranking
    /// and reported under `skipped`; the rest are still scored.
    pub async fn match_job(&self, description: &str) -> Result<JobMatchReport> {
        let listed = self.store.list().await?;
        info!("Matching {} stored resumes against job description", listed.len());

        let mut documents = Vec::with_capacity(listed.len());
        let mut skipped = Vec::new();

        for document in listed {
            let read = self.store.read(&document.name).await;
            match read {
                Ok(bytes) => {
                    let text = self.input.extract(&document.name, &bytes);
                    documents.push((document.name, text));
                }
                Err(e) => {
                    warn!("Skipping {}: {}", document.name, e);
                    skipped.push(SkippedDocument {
                        filename: document.name,
                        reason: e.to_string(),
                    });
                }
            }
        }

        let ranked = JobScorer::new(&self.vocabulary).score(description, documents);
        Ok(JobMatchReport::new(ranked, skipped))
    }
}
