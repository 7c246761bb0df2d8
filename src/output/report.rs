//! Report structures returned to the operator

use crate::processing::scorer::{MatchResult, RankedMatches};
use serde::{Deserialize, Serialize};

/// One resume with its extracted content and detected skills
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeView {
    pub name: String,
    pub content: String,
    /// Never empty: holds the "Not Extracted" placeholder when no skill was found
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadReceipt {
    pub message: String,
    pub filename: String,
    pub name: String,
}

impl UploadReceipt {
    pub fn new(name: &str) -> Self {
        Self {
            message: "Upload successful".to_string(),
            filename: name.to_string(),
            name: name.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteReceipt {
    pub message: String,
}

impl DeleteReceipt {
    pub fn new(name: &str) -> Self {
        Self {
            message: format!("{} deleted successfully", name),
        }
    }
}

/// A listed document that could not be read during a matching pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedDocument {
    pub filename: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobMatchReport {
    pub job_skills: Vec<String>,
    pub matches: Vec<MatchResult>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedDocument>,
}

impl JobMatchReport {
    pub fn new(ranked: RankedMatches, skipped: Vec<SkippedDocument>) -> Self {
        Self {
            job_skills: ranked.job_skills,
            matches: ranked.matches,
            skipped,
        }
    }
}
