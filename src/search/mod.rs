//! Web search tool abstraction
//!
//! Each pipeline stage issues one search through a [`SearchTool`] and feeds
//! the formatted findings into its prompt. The trait keeps the engine
//! testable with an in-memory mock.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod tavily;

pub use tavily::{TavilyConfig, TavilySearch};

/// One search hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub url: String,
    pub snippet: String,
}

/// Web search tool trait for dependency injection and testing
#[async_trait]
pub trait SearchTool: Send + Sync {
    /// Get the tool name (e.g., "tavily")
    fn name(&self) -> &str;

    /// Run one query and return ranked results
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError>;
}

/// Search tool errors
#[derive(Debug, Clone, Error)]
pub enum SearchError {
    #[error("Search tool not configured: {0}")]
    NotConfigured(String),
    #[error("Request failed: {0}")]
    RequestFailed(String),
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
    #[error("API error: {0}")]
    ApiError(String),
}

/// Format search results as prompt text (pure function)
///
/// Empty result sets produce an explicit note so the model is not left
/// guessing whether a search happened.
pub fn format_findings(results: &[SearchResult]) -> String {
    if results.is_empty() {
        return "No web search results were found for this stage.".to_string();
    }

    let mut findings = String::from("Web search findings:\n");
    for result in results {
        findings.push_str(&format!(
            "- {} ({}): {}\n",
            result.title, result.url, result.snippet
        ));
    }
    findings
}
