//! Configuration management for the resume matcher

use crate::error::{Result, ResumeMatcherError};
use crate::processing::vocabulary::DEFAULT_SKILLS;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub storage: StorageConfig,
    pub skills: SkillsConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    pub uploads_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillsConfig {
    /// Ordered skill vocabulary; order decides the order skills are reported in
    pub vocabulary: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color_output: bool,
    pub content_preview_chars: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage: StorageConfig {
                uploads_dir: PathBuf::from("uploads"),
            },
            skills: SkillsConfig {
                vocabulary: DEFAULT_SKILLS.iter().map(|s| s.to_string()).collect(),
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                color_output: true,
                content_preview_chars: 500,
            },
        }
    }
}

impl Config {
    /// Load from `config_path`, writing defaults there on first run
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = toml::from_str(&content)
                .map_err(|e| ResumeMatcherError::Configuration(format!("Failed to parse config: {}", e)))?;
            config.validate()?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(config_path)?;
            Ok(config)
        }
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ResumeMatcherError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-matcher")
            .join("config.toml")
    }

    /// Reject vocabularies with empty or case-insensitively repeated entries
    pub fn validate(&self) -> Result<()> {
        if self.skills.vocabulary.is_empty() {
            return Err(ResumeMatcherError::Configuration(
                "skills.vocabulary must contain at least one skill".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for skill in &self.skills.vocabulary {
            if skill.trim().is_empty() {
                return Err(ResumeMatcherError::Configuration(
                    "skills.vocabulary contains an empty entry".to_string(),
                ));
            }
            if !seen.insert(skill.to_lowercase()) {
                return Err(ResumeMatcherError::Configuration(format!(
                    "skills.vocabulary lists '{}' more than once",
                    skill
                )));
            }
        }

        Ok(())
    }

    /// Update a single dotted key, as used by `config set`
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "storage.uploads_dir" => {
                self.storage.uploads_dir = PathBuf::from(value);
            }
            "skills.vocabulary" => {
                self.skills.vocabulary = value
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect();
            }
            "output.format" => {
                self.output.format = OutputFormat::parse(value)
                    .map_err(ResumeMatcherError::InvalidInput)?;
            }
            "output.color_output" => {
                self.output.color_output = value.parse().map_err(|_| {
                    ResumeMatcherError::InvalidInput(format!("Expected true or false, got '{}'", value))
                })?;
            }
            "output.content_preview_chars" => {
                self.output.content_preview_chars = value.parse().map_err(|_| {
                    ResumeMatcherError::InvalidInput(format!("Expected a number, got '{}'", value))
                })?;
            }
            _ => {
                return Err(ResumeMatcherError::InvalidInput(format!(
                    "Unknown configuration key: {}",
                    key
                )));
            }
        }

        self.validate()
    }
}

impl OutputFormat {
    pub fn parse(format: &str) -> std::result::Result<Self, String> {
        match format.to_lowercase().as_str() {
            "console" => Ok(OutputFormat::Console),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(format!("Invalid output format: {}. Supported: console, json, markdown", format)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.skills.vocabulary.len(), 10);
        assert_eq!(config.skills.vocabulary[0], "Python");
        assert_eq!(config.storage.uploads_dir, PathBuf::from("uploads"));
    }

    #[test]
    fn test_load_writes_defaults_on_first_run() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config, Config::default());
        assert!(path.exists());

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded, config);
    }

    #[test]
    fn test_load_rejects_empty_skill() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = Config::default();
        config.skills.vocabulary.push("  ".to_string());
        config.save_to(&path).unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ResumeMatcherError::Configuration(_)));
    }

    #[test]
    fn test_duplicate_skill_rejected() {
        let mut config = Config::default();
        config.skills.vocabulary.push("python".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_set_value() {
        let mut config = Config::default();
        config.set_value("skills.vocabulary", "Rust, Go ,SQL").unwrap();
        assert_eq!(config.skills.vocabulary, vec!["Rust", "Go", "SQL"]);

        config.set_value("output.format", "md").unwrap();
        assert_eq!(config.output.format, OutputFormat::Markdown);

        config.set_value("output.color_output", "false").unwrap();
        assert!(!config.output.color_output);

        assert!(config.set_value("output.color_output", "maybe").is_err());
        assert!(config.set_value("models.dir", "x").is_err());
        assert!(config.set_value("skills.vocabulary", " , ").is_err());
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!(OutputFormat::parse("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("console").unwrap(), OutputFormat::Console);
        assert!(OutputFormat::parse("pdf").is_err());
    }
}
