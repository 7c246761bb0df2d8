//! Resume matcher: skill detection and job matching over a folder of resumes

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};
use resume_matcher::cli::{Cli, Commands, ConfigAction};
use resume_matcher::config::{Config, OutputFormat};
use resume_matcher::output::formatter::{save_report_to_file, ReportGenerator};
use resume_matcher::processing::ResumePipeline;
use resume_matcher::{Result, ResumeMatcherError};
use std::path::PathBuf;
use std::process;
use std::time::Duration;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_level)
    ).init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli, config, config_path).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(cli: Cli, mut config: Config, config_path: PathBuf) -> Result<()> {
    if let Some(dir) = &cli.uploads_dir {
        config.storage.uploads_dir = dir.clone();
    }

    let format = match &cli.output {
        Some(format) => OutputFormat::parse(format).map_err(ResumeMatcherError::InvalidInput)?,
        None => config.output.format,
    };
    let use_colors = config.output.color_output && !cli.no_color;

    match cli.command {
        Commands::Upload { file, name } => {
            let pipeline = ResumePipeline::from_config(&config)?;
            let receipt = pipeline.upload_file(&file, name.as_deref()).await?;
            let generator = ReportGenerator::with_options(use_colors, None, true);
            print!("{}", generator.formatter(format).format_upload(&receipt)?);
        }

        Commands::List => {
            let pipeline = ResumePipeline::from_config(&config)?;
            let documents = pipeline.list().await?;
            let generator = ReportGenerator::with_options(use_colors, None, true);
            println!("{}", generator.formatter(format).format_listing(&documents)?);
        }

        Commands::View { name, full, save } => {
            let pipeline = ResumePipeline::from_config(&config)?;
            let view = pipeline.view(&name).await?;

            let preview = if full { None } else { Some(config.output.content_preview_chars) };
            let generator = ReportGenerator::with_options(use_colors && save.is_none(), preview, true);
            let rendered = generator.formatter(format).format_view(&view)?;

            emit(&rendered, save)?;
        }

        Commands::Delete { name } => {
            let pipeline = ResumePipeline::from_config(&config)?;
            let receipt = pipeline.delete(&name).await?;
            let generator = ReportGenerator::with_options(use_colors, None, true);
            print!("{}", generator.formatter(format).format_delete(&receipt)?);
        }

        Commands::Match { job, save } => {
            let pipeline = ResumePipeline::from_config(&config)?;

            let description = match (job.description, job.job) {
                (Some(description), _) => description,
                (None, Some(path)) => {
                    info!("Reading job description from {}", path.display());
                    pipeline.input().extract_file(&path).await?
                }
                (None, None) => {
                    return Err(ResumeMatcherError::InvalidInput(
                        "Provide --description or --job".to_string(),
                    ));
                }
            };

            let spinner = scoring_spinner(format == OutputFormat::Console);
            let report = pipeline.match_job(&description).await;
            spinner.finish_and_clear();
            let report = report?;

            let generator = ReportGenerator::with_options(use_colors && save.is_none(), None, true);
            let rendered = generator.formatter(format).format_match_report(&report)?;

            emit(&rendered, save)?;
        }

        Commands::Config { action } => match action.unwrap_or(ConfigAction::Show) {
            ConfigAction::Show => {
                let content = toml::to_string_pretty(&config)
                    .map_err(|e| ResumeMatcherError::Configuration(format!("Failed to serialize config: {}", e)))?;
                println!("{}", content);
            }
            ConfigAction::Path => {
                println!("{}", config_path.display());
            }
            ConfigAction::Reset => {
                Config::default().save_to(&config_path)?;
                println!("✅ Configuration reset to defaults: {}", config_path.display());
            }
            ConfigAction::Set { key, value } => {
                // reload so a --uploads-dir override is not persisted
                let mut stored = Config::load_from(&config_path)?;
                stored.set_value(&key, &value)?;
                stored.save_to(&config_path)?;
                println!("✅ {} = {}", key, value);
            }
        },
    }

    Ok(())
}

fn emit(rendered: &str, save: Option<PathBuf>) -> Result<()> {
    match save {
        Some(path) => {
            save_report_to_file(rendered, &path)?;
            println!("💾 Saved to {}", path.display());
        }
        None => println!("{}", rendered),
    }
    Ok(())
}

fn scoring_spinner(visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.green} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message("Scoring resumes...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
