//! Output formatters: console, JSON and Markdown renderings of every report

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::*;
use crate::processing::skill_matcher::NOT_EXTRACTED;
use crate::store::StoredDocument;
use colored::{Color, Colorize};
use serde::Serialize;
use std::path::Path;

/// Trait for rendering operator-facing results
pub trait OutputFormatter {
    fn format_listing(&self, documents: &[StoredDocument]) -> Result<String>;
    fn format_view(&self, view: &ResumeView) -> Result<String>;
    fn format_match_report(&self, report: &JobMatchReport) -> Result<String>;
    fn format_upload(&self, receipt: &UploadReceipt) -> Result<String>;
    fn format_delete(&self, receipt: &DeleteReceipt) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors and score badges
pub struct ConsoleFormatter {
    use_colors: bool,
    /// Characters of resume content shown by `format_view`; `None` shows all
    content_preview: Option<usize>,
}

/// JSON formatter mirroring the report structures
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for sharing results
pub struct MarkdownFormatter;

/// Holds one formatter per output format
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, content_preview: Option<usize>) -> Self {
        Self {
            use_colors,
            content_preview,
        }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, score: f64) -> String {
        let (badge, color) = match score {
            s if s >= 90.0 => ("EXCELLENT", Color::Green),
            s if s >= 70.0 => ("GOOD", Color::BrightGreen),
            s if s >= 50.0 => ("FAIR", Color::Yellow),
            s if s > 0.0 => ("WEAK", Color::Red),
            _ => ("NONE", Color::BrightRed),
        };

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn format_skill_list(&self, skills: &[String]) -> String {
        if skills.is_empty() {
            return self.colorize("none", Color::BrightBlack);
        }
        skills
            .iter()
            .map(|s| {
                if s == NOT_EXTRACTED {
                    self.colorize(s, Color::BrightBlack)
                } else {
                    self.colorize(s, Color::Cyan)
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_listing(&self, documents: &[StoredDocument]) -> Result<String> {
        let mut output = self.format_header(&format!("Stored resumes ({})", documents.len()), 1);

        if documents.is_empty() {
            output.push_str("No resumes uploaded yet.\n");
            return Ok(output);
        }

        for document in documents {
            let modified = document
                .modified
                .map(|m| m.format("%Y-%m-%d %H:%M UTC").to_string())
                .unwrap_or_else(|| "-".to_string());
            output.push_str(&format!(
                "  • {}  {}  {}\n",
                self.colorize(&document.name, Color::Cyan),
                format_size(document.size_bytes),
                modified
            ));
        }

        Ok(output)
    }

    fn format_view(&self, view: &ResumeView) -> Result<String> {
        let mut output = self.format_header(&view.name, 1);

        output.push_str(&format!("Skills: {}\n", self.format_skill_list(&view.skills)));

        output.push_str(&self.format_header("Content", 2));
        match self.content_preview {
            Some(limit) => output.push_str(&truncate_text(&view.content, limit)),
            None => output.push_str(&view.content),
        }
        output.push('\n');

        Ok(output)
    }

    fn format_match_report(&self, report: &JobMatchReport) -> Result<String> {
        let mut output = self.format_header("JOB MATCHING RESULTS", 1);

        output.push_str(&format!("Job skills: {}\n", self.format_skill_list(&report.job_skills)));
        if report.job_skills.is_empty() {
            output.push_str(&self.colorize(
                "No known skills found in the job description; every score is 0.\n",
                Color::Yellow,
            ));
        }

        output.push_str(&self.format_header(&format!("Ranking ({} resumes)", report.matches.len()), 2));
        for (rank, result) in report.matches.iter().enumerate() {
            output.push_str(&format!(
                "{:>3}. {}  {:.2}% {}\n",
                rank + 1,
                self.colorize(&result.filename, Color::White),
                result.match_score,
                self.format_score_badge(result.match_score)
            ));
            output.push_str(&format!(
                "     Matched: {}\n",
                self.format_skill_list(&result.matched_skills)
            ));
        }

        if !report.skipped.is_empty() {
            output.push_str(&self.format_header("Skipped", 3));
            for skipped in &report.skipped {
                output.push_str(&format!(
                    "  ⚠️  {}: {}\n",
                    self.colorize(&skipped.filename, Color::Yellow),
                    skipped.reason
                ));
            }
        }

        Ok(output)
    }

    fn format_upload(&self, receipt: &UploadReceipt) -> Result<String> {
        Ok(format!("✅ {}: {}\n", receipt.message, self.colorize(&receipt.filename, Color::Cyan)))
    }

    fn format_delete(&self, receipt: &DeleteReceipt) -> Result<String> {
        Ok(format!("🗑️  {}\n", receipt.message))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    fn to_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(value)?)
        } else {
            Ok(serde_json::to_string(value)?)
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_listing(&self, documents: &[StoredDocument]) -> Result<String> {
        self.to_json(documents)
    }

    fn format_view(&self, view: &ResumeView) -> Result<String> {
        self.to_json(view)
    }

    fn format_match_report(&self, report: &JobMatchReport) -> Result<String> {
        self.to_json(report)
    }

    fn format_upload(&self, receipt: &UploadReceipt) -> Result<String> {
        self.to_json(receipt)
    }

    fn format_delete(&self, receipt: &DeleteReceipt) -> Result<String> {
        self.to_json(receipt)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_listing(&self, documents: &[StoredDocument]) -> Result<String> {
        let mut output = String::from("# Stored Resumes\n\n");
        if documents.is_empty() {
            output.push_str("_No resumes uploaded yet._\n");
            return Ok(output);
        }

        output.push_str("| Name | Size | Modified |\n|------|------|----------|\n");
        for document in documents {
            let modified = document
                .modified
                .map(|m| m.format("%Y-%m-%d %H:%M UTC").to_string())
                .unwrap_or_else(|| "-".to_string());
            output.push_str(&format!(
                "| {} | {} | {} |\n",
                escape_cell(&document.name),
                format_size(document.size_bytes),
                modified
            ));
        }
        Ok(output)
    }

    fn format_view(&self, view: &ResumeView) -> Result<String> {
        let mut output = format!("# {}\n\n", view.name);
        output.push_str(&format!("**Skills:** {}\n\n", view.skills.join(", ")));
        output.push_str("## Content\n\n```text\n");
        output.push_str(&view.content);
        if !view.content.ends_with('\n') {
            output.push('\n');
        }
        output.push_str("```\n");
        Ok(output)
    }

    fn format_match_report(&self, report: &JobMatchReport) -> Result<String> {
        let mut output = String::from("# Job Matching Results\n\n");

        let job_skills = if report.job_skills.is_empty() {
            "_none_".to_string()
        } else {
            report.job_skills.join(", ")
        };
        output.push_str(&format!("**Job skills:** {}\n\n", job_skills));

        output.push_str("| Rank | Resume | Score | Matched Skills |\n");
        output.push_str("|------|--------|-------|----------------|\n");
        for (rank, result) in report.matches.iter().enumerate() {
            output.push_str(&format!(
                "| {} | {} | {:.2}% | {} |\n",
                rank + 1,
                escape_cell(&result.filename),
                result.match_score,
                result.matched_skills.join(", ")
            ));
        }

        if !report.skipped.is_empty() {
            output.push_str("\n## Skipped\n\n");
            for skipped in &report.skipped {
                output.push_str(&format!("- `{}`: {}\n", skipped.filename, skipped.reason));
            }
        }

        Ok(output)
    }

    fn format_upload(&self, receipt: &UploadReceipt) -> Result<String> {
        Ok(format!("{}: `{}`\n", receipt.message, receipt.filename))
    }

    fn format_delete(&self, receipt: &DeleteReceipt) -> Result<String> {
        Ok(format!("{}\n", receipt.message))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn with_options(use_colors: bool, content_preview: Option<usize>, pretty_json: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, content_preview),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter,
        }
    }

    pub fn formatter(&self, format: OutputFormat) -> &dyn OutputFormatter {
        match format {
            OutputFormat::Console => &self.console_formatter,
            OutputFormat::Json => &self.json_formatter,
            OutputFormat::Markdown => &self.markdown_formatter,
        }
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(file_path, content)?;
    Ok(())
}

/// Truncate on a character boundary, marking the cut
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}…", &text[..cut]),
        None => text.to_string(),
    }
}

fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}
