//! CLI interface for the resume matcher

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-matcher")]
#[command(about = "Extract resume text, detect skills and rank candidates against a job description")]
#[command(long_about = "Manage a folder of uploaded resumes (PDF, Word, text), view the skills found in each, and rank them by how many of a job description's skills they mention")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding uploaded resumes (overrides the configuration)
    #[arg(short, long, global = true)]
    pub uploads_dir: Option<PathBuf>,

    /// Output format: console, json, markdown
    #[arg(short, long, global = true)]
    pub output: Option<String>,

    /// Disable colored console output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Upload a resume into the store
    Upload {
        /// Path to the resume file (PDF, DOCX, TXT, ...)
        file: PathBuf,

        /// Store under this name instead of the file name
        #[arg(short, long)]
        name: Option<String>,
    },

    /// List stored resumes
    List,

    /// Show a stored resume's text and detected skills
    View {
        /// Resume name, optionally percent-encoded
        name: String,

        /// Print the whole content instead of a preview
        #[arg(short, long)]
        full: bool,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Delete a stored resume
    Delete {
        /// Resume name, optionally percent-encoded
        name: String,
    },

    /// Rank all stored resumes against a job description
    Match {
        #[command(flatten)]
        job: JobInput,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Args)]
#[group(required = true, multiple = false)]
pub struct JobInput {
    /// Job description text
    #[arg(short, long)]
    pub description: Option<String>,

    /// Path to a job description file (PDF, DOCX, TXT, ...)
    #[arg(short, long)]
    pub job: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Reset configuration to defaults
    Reset,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., "skills.vocabulary")
        key: String,

        /// Configuration value
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_match_requires_one_job_source() {
        assert!(Cli::try_parse_from(["resume-matcher", "match"]).is_err());
        assert!(Cli::try_parse_from(["resume-matcher", "match", "-d", "Python", "-j", "job.txt"]).is_err());

        let cli = Cli::try_parse_from(["resume-matcher", "match", "--description", "Python and SQL"]).unwrap();
        match cli.command {
            Commands::Match { job, .. } => {
                assert_eq!(job.description.as_deref(), Some("Python and SQL"));
                assert!(job.job.is_none());
            }
            _ => panic!("expected match command"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["resume-matcher", "list", "--output", "json", "--no-color"]).unwrap();
        assert_eq!(cli.output.as_deref(), Some("json"));
        assert!(cli.no_color);
    }
}
