//! Tavily search backend
//!
//! Calls the Tavily search API for current web information. Payload building
//! and response parsing are pure functions; only `search` performs I/O.

use crate::search::{SearchError, SearchResult, SearchTool};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::debug;

/// Tavily search configuration
#[derive(Debug, Clone)]
pub struct TavilyConfig {
    pub api_key: String,
    pub base_url: String,
    pub max_results: usize,
    pub search_depth: String,
    pub timeout: Duration,
}

impl Default for TavilyConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://api.tavily.com".to_string(),
            max_results: 8,
            search_depth: "advanced".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Tavily search tool
pub struct TavilySearch {
    config: TavilyConfig,
    client: reqwest::Client,
}

impl TavilySearch {
    /// Create a new Tavily search tool
    pub fn new(config: TavilyConfig) -> Result<Self, SearchError> {
        if config.api_key.is_empty() {
            return Err(SearchError::NotConfigured(
                "Tavily API key is required".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| SearchError::RequestFailed(e.to_string()))?;

        Ok(Self { config, client })
    }

    /// Build search payload (pure function)
    fn build_search_payload(
        api_key: &str,
        query: &str,
        max_results: usize,
        search_depth: &str,
    ) -> Value {
        json!({
            "api_key": api_key,
            "query": query,
            "max_results": max_results,
            "search_depth": search_depth,
        })
    }

    /// Parse search response (pure function)
    fn parse_search_response(search_result: &Value, max_results: usize) -> Vec<SearchResult> {
        let mut results = Vec::new();

        if let Some(hits) = search_result.get("results").and_then(|r| r.as_array()) {
            for hit in hits.iter().take(max_results) {
                if let (Some(title), Some(url)) = (
                    hit.get("title").and_then(|t| t.as_str()),
                    hit.get("url").and_then(|u| u.as_str()),
                ) {
                    let snippet = hit.get("content").and_then(|c| c.as_str()).unwrap_or("");
                    results.push(SearchResult {
                        title: title.to_string(),
                        url: url.to_string(),
                        snippet: snippet.to_string(),
                    });
                }
            }
        }

        results
    }
}

#[async_trait]
impl SearchTool for TavilySearch {
    fn name(&self) -> &str {
        "tavily"
    }

    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
        if query.trim().is_empty() {
            return Err(SearchError::RequestFailed(
                "Query must not be empty".to_string(),
            ));
        }

        let payload = Self::build_search_payload(
            &self.config.api_key,
            query,
            self.config.max_results,
            &self.config.search_depth,
        );

        let response = self
            .client
            .post(format!("{}/search", self.config.base_url))
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(|e| SearchError::RequestFailed(format!("Request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SearchError::ApiError(format!(
                "Tavily API error ({}): {}",
                status.as_u16(),
                error_text
            )));
        }

        let search_result: Value = response
            .json()
            .await
            .map_err(|e| SearchError::InvalidResponse(format!("Failed to parse response: {e}")))?;

        let results = Self::parse_search_response(&search_result, self.config.max_results);
        debug!(
            query = %query,
            result_count = results.len(),
            "Tavily search completed"
        );

        Ok(results)
    }
}
