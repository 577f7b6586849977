//! Pipeline runner
//!
//! Owns one run end to end: build the roster, build the tasks, hand them to
//! the execution engine, and render the report. Every failure is caught once
//! at this boundary and converted into the null result triple; no retry, no
//! partial-result recovery.

use crate::agents::{AgentRoster, PipelineVariant};
use crate::error::{redact_secrets, PipelineFailure};
use crate::pipeline::{build_tasks, ExecutionEngine};
use crate::report::{ReportRenderer, WrittenReport};
use chrono::Local;
use std::path::PathBuf;
use tracing::{error, info};
use uuid::Uuid;

/// Result triple returned by [`MarketResearchSystem::run`]
///
/// `(Some(markdown), Some(md_path), Some(html_path))` on success,
/// `(None, None, None)` on any failure.
pub type RunOutcome = (Option<String>, Option<PathBuf>, Option<PathBuf>);

/// One-shot market research pipeline for a company/industry pair
pub struct MarketResearchSystem {
    company: String,
    industry: String,
    variant: PipelineVariant,
    engine: Box<dyn ExecutionEngine>,
    renderer: ReportRenderer,
}

impl MarketResearchSystem {
    pub fn new(
        company: impl Into<String>,
        industry: impl Into<String>,
        variant: PipelineVariant,
        engine: Box<dyn ExecutionEngine>,
        renderer: ReportRenderer,
    ) -> Self {
        Self {
            company: company.into(),
            industry: industry.into(),
            variant,
            engine,
            renderer,
        }
    }

    /// Run the pipeline and report the outcome as a triple
    ///
    /// This is the single catch point for the whole run: construction,
    /// execution, and rendering errors all surface here as one redacted log
    /// event plus the null triple.
    pub async fn run(&self) -> RunOutcome {
        let run_id = Uuid::new_v4();
        info!(
            run_id = %run_id,
            company = %self.company,
            industry = %self.industry,
            variant = ?self.variant,
            "Analyzing {} in {}",
            self.company,
            self.industry
        );

        match self.run_inner().await {
            Ok(report) => {
                info!(
                    run_id = %run_id,
                    markdown_path = %report.markdown_path.display(),
                    "Market research pipeline completed"
                );
                (
                    Some(report.markdown),
                    Some(report.markdown_path),
                    Some(report.html_path),
                )
            }
            Err(e) => {
                error!(
                    run_id = %run_id,
                    error = %redact_secrets(&e.to_string()),
                    "Market research pipeline failed"
                );
                (None, None, None)
            }
        }
    }

    async fn run_inner(&self) -> Result<WrittenReport, PipelineFailure> {
        let roster = AgentRoster::build(self.variant, &self.company, &self.industry)?;
        let tasks = build_tasks(&roster, &self.company, &self.industry);
        let result = self.engine.execute(&tasks).await?;
        self.renderer.write(&self.company, &result, Local::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::mocks::{FailingEngine, ScriptedEngine};

    fn system_with_engine(
        engine: Box<dyn ExecutionEngine>,
        reports_dir: std::path::PathBuf,
    ) -> MarketResearchSystem {
        MarketResearchSystem::new(
            "Acme Corp",
            "Logistics",
            PipelineVariant::Full,
            engine,
            ReportRenderer::new(reports_dir),
        )
    }

    #[tokio::test]
    async fn test_run_success_returns_full_triple() {
        let dir = tempfile::tempdir().unwrap();
        let system = system_with_engine(
            Box::new(ScriptedEngine::new("| Use Case | X |")),
            dir.path().join("reports"),
        );

        let (markdown, md_path, html_path) = system.run().await;

        let markdown = markdown.expect("markdown text expected");
        assert!(markdown.contains("# AI Implementation Analysis for Acme Corp"));
        assert!(markdown.contains("| Use Case | X |"));
        assert!(md_path.unwrap().exists());
        assert!(html_path.unwrap().exists());
    }

    #[tokio::test]
    async fn test_run_failure_returns_null_triple_and_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let reports_dir = dir.path().join("reports");
        let system = system_with_engine(Box::new(FailingEngine::at_stage(2)), reports_dir.clone());

        let outcome = system.run().await;

        assert!(matches!(outcome, (None, None, None)));
        assert!(!reports_dir.exists());
    }

    #[tokio::test]
    async fn test_run_empty_result_returns_null_triple() {
        let dir = tempfile::tempdir().unwrap();
        let reports_dir = dir.path().join("reports");
        let system = system_with_engine(Box::new(ScriptedEngine::new("   ")), reports_dir.clone());

        let outcome = system.run().await;

        assert!(matches!(outcome, (None, None, None)));
        assert!(!reports_dir.exists());
    }

    #[tokio::test]
    async fn test_run_rejects_empty_company_before_execution() {
        let dir = tempfile::tempdir().unwrap();
        let system = MarketResearchSystem::new(
            "",
            "Logistics",
            PipelineVariant::Single,
            Box::new(ScriptedEngine::new("content")),
            ReportRenderer::new(dir.path().join("reports")),
        );

        let outcome = system.run().await;
        assert!(matches!(outcome, (None, None, None)));
    }
}
