//! Market research pipeline
//!
//! A sequential multi-agent pipeline that assembles an AI implementation
//! report for a named company and industry. Each stage binds one role persona
//! to a shared language model client and web search tool, executes strictly
//! in order, and feeds its output forward through an accumulated transcript.
//! The final artifact is rendered as a Markdown document plus a styled HTML
//! page and written to the reports directory.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use market_research::agents::PipelineVariant;
//! use market_research::pipeline::sequential::{SequentialEngine, StageModel};
//! use market_research::llm::providers::{OpenAiConfig, OpenAiProvider};
//! use market_research::report::ReportRenderer;
//! use market_research::runner::MarketResearchSystem;
//! use market_research::search::{TavilyConfig, TavilySearch};
//! use std::sync::Arc;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = OpenAiProvider::new(OpenAiConfig {
//!     api_key: "sk-...".to_string(),
//!     ..Default::default()
//! })?;
//! let search = TavilySearch::new(TavilyConfig {
//!     api_key: "tvly-...".to_string(),
//!     ..Default::default()
//! })?;
//!
//! let engine = SequentialEngine::new(Arc::new(provider), Arc::new(search), StageModel::default());
//! let system = MarketResearchSystem::new(
//!     "Acme Corp",
//!     "Logistics",
//!     PipelineVariant::Full,
//!     Box::new(engine),
//!     ReportRenderer::new("reports"),
//! );
//!
//! let (_markdown, _md_path, _html_path) = system.run().await;
//! # Ok(())
//! # }
//! ```

pub mod agents;
pub mod config;
pub mod error;
pub mod llm;
pub mod observability;
pub mod pipeline;
pub mod prompts;
pub mod report;
pub mod runner;
pub mod search;
pub mod testing;

pub use agents::{AgentRoster, AgentSpec, PipelineVariant};
pub use config::{ConfigError, ResearchConfig};
pub use error::PipelineFailure;
pub use pipeline::{build_tasks, ExecutionEngine, SequentialEngine, TaskSpec};
pub use report::{ReportRenderer, WrittenReport};
pub use runner::{MarketResearchSystem, RunOutcome};
