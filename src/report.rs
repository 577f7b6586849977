//! Report rendering and file output
//!
//! Wraps the raw pipeline result in a Markdown document with a fixed
//! title/timestamp header, converts it to a styled HTML page, and writes both
//! files. All rendering takes the timestamp as a parameter, so a frozen clock
//! reproduces byte-identical output.

use crate::error::PipelineFailure;
use chrono::{DateTime, Local};
use comrak::{markdown_to_html, Options};
use std::path::{Path, PathBuf};
use tracing::info;

/// Paths and content of one written report pair
#[derive(Debug, Clone)]
pub struct WrittenReport {
    pub markdown: String,
    pub markdown_path: PathBuf,
    pub html_path: PathBuf,
}

/// Renders and writes the Markdown/HTML report pair
#[derive(Debug, Clone)]
pub struct ReportRenderer {
    reports_dir: PathBuf,
}

impl ReportRenderer {
    pub fn new<P: Into<PathBuf>>(reports_dir: P) -> Self {
        Self {
            reports_dir: reports_dir.into(),
        }
    }

    /// Render the Markdown document (pure function)
    ///
    /// Fails with `EmptyResult` before anything touches the filesystem when
    /// the pipeline result is empty or whitespace-only.
    pub fn render_markdown(
        company: &str,
        body: &str,
        generated_at: DateTime<Local>,
    ) -> Result<String, PipelineFailure> {
        if body.trim().is_empty() {
            return Err(PipelineFailure::EmptyResult);
        }

        Ok(format!(
            "# AI Implementation Analysis for {company}\n\
             Generated on: {date}\n\n\
             ## Overview\n\
             This analysis provides implementation resources for {company}'s AI initiatives \
             across different use cases, along with relevant datasets and implementation \
             resources.\n\n\
             {body}",
            date = generated_at.format("%Y-%m-%d"),
        ))
    }

    /// Convert Markdown to the styled HTML page (pure function)
    ///
    /// Pipe tables and newline-to-break conversion are enabled; raw HTML is
    /// passed through because table cells separate entries with `<br>`.
    pub fn render_html(markdown: &str) -> String {
        let mut options = Options::default();
        options.extension.table = true;
        options.render.hardbreaks = true;
        options.render.unsafe_ = true;

        let html_content = markdown_to_html(markdown, &options);
        format!("{HTML_HEAD}{html_content}{HTML_TAIL}")
    }

    /// Base output path without extension (pure given the clock)
    ///
    /// `<reports_dir>/<company lowercased>_<YYYYMMDD_HHMMSS>`; spaces in the
    /// company name are preserved.
    pub fn base_path(&self, company: &str, generated_at: DateTime<Local>) -> PathBuf {
        self.reports_dir.join(format!(
            "{}_{}",
            company.to_lowercase(),
            generated_at.format("%Y%m%d_%H%M%S")
        ))
    }

    /// Render both documents and write them to disk
    ///
    /// Creates the reports directory if absent. Nothing is written when
    /// rendering fails.
    pub fn write(
        &self,
        company: &str,
        body: &str,
        generated_at: DateTime<Local>,
    ) -> Result<WrittenReport, PipelineFailure> {
        let markdown = Self::render_markdown(company, body, generated_at)?;
        let html = Self::render_html(&markdown);

        std::fs::create_dir_all(&self.reports_dir)?;

        let base = self.base_path(company, generated_at);
        let markdown_path = with_extension(&base, "md");
        let html_path = with_extension(&base, "html");

        std::fs::write(&markdown_path, &markdown)?;
        std::fs::write(&html_path, &html)?;

        info!(
            markdown_path = %markdown_path.display(),
            html_path = %html_path.display(),
            "Report files written"
        );

        Ok(WrittenReport {
            markdown,
            markdown_path,
            html_path,
        })
    }
}

/// Append an extension without clobbering dots in the file stem
///
/// `Path::set_extension` would truncate at the last dot of a company name
/// like "acme.io", so the extension is appended textually instead.
fn with_extension(base: &Path, extension: &str) -> PathBuf {
    let mut s = base.as_os_str().to_os_string();
    s.push(".");
    s.push(extension);
    PathBuf::from(s)
}

const HTML_HEAD: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <style>
        body {
            font-family: Arial, sans-serif;
            line-height: 1.6;
            max-width: 1200px;
            margin: 0 auto;
            padding: 20px;
        }
        table {
            border-collapse: collapse;
            width: 100%;
            margin: 20px 0;
        }
        th, td {
            border: 1px solid #ddd;
            padding: 12px;
            text-align: left;
        }
        th {
            background-color: #f5f5f5;
        }
        tr:nth-child(even) {
            background-color: #f9f9f9;
        }
    </style>
</head>
<body>
"#;

const HTML_TAIL: &str = "</body>\n</html>\n";
