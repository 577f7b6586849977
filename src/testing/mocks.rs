//! Mock implementations of the provider, search, and engine traits
//!
//! Used by unit tests and the integration tests under `tests/`. The mocks
//! record what they were asked so tests can assert on prompt contents and
//! call ordering.

use crate::error::PipelineFailure;
use crate::llm::provider::{
    CompletionRequest, CompletionResponse, FinishReason, LlmError, LlmProvider, TokenUsage,
};
use crate::pipeline::{ExecutionEngine, TaskSpec};
use crate::search::{SearchError, SearchResult, SearchTool};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// LLM provider that replays scripted responses in order
pub struct MockLlmProvider {
    responses: Mutex<VecDeque<String>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl MockLlmProvider {
    pub fn with_responses(responses: Vec<String>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Requests received so far, in call order
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmProvider for MockLlmProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        self.requests.lock().unwrap().push(request.clone());

        let content = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| LlmError::RequestFailed("mock response queue empty".to_string()))?;

        Ok(CompletionResponse {
            content: Some(content),
            model: request.model,
            usage: TokenUsage {
                prompt_tokens: 10,
                completion_tokens: 20,
                total_tokens: 30,
            },
            finish_reason: FinishReason::Stop,
        })
    }

    async fn health_check(&self) -> Result<(), LlmError> {
        Ok(())
    }
}

/// Search tool that returns fixed results and records queries
#[derive(Default)]
pub struct MockSearchTool {
    results: Vec<SearchResult>,
    queries: Mutex<Vec<String>>,
}

impl MockSearchTool {
    pub fn with_results(results: Vec<SearchResult>) -> Self {
        Self {
            results,
            queries: Mutex::new(Vec::new()),
        }
    }

    /// Queries received so far, in call order
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl SearchTool for MockSearchTool {
    fn name(&self) -> &str {
        "mock"
    }

    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
        self.queries.lock().unwrap().push(query.to_string());
        Ok(self.results.clone())
    }
}

/// Engine that returns a fixed final artifact without any I/O
pub struct ScriptedEngine {
    result: String,
}

impl ScriptedEngine {
    pub fn new<S: Into<String>>(result: S) -> Self {
        Self {
            result: result.into(),
        }
    }
}

#[async_trait]
impl ExecutionEngine for ScriptedEngine {
    async fn execute(&self, _tasks: &[TaskSpec]) -> Result<String, PipelineFailure> {
        Ok(self.result.clone())
    }
}

/// Engine that simulates sequential execution and fails at a given stage
///
/// Stages before the failing one "succeed" silently; reaching the configured
/// stage raises an execution error, mirroring a mid-pipeline provider fault.
pub struct FailingEngine {
    fail_at_stage: usize,
}

impl FailingEngine {
    pub fn at_stage(fail_at_stage: usize) -> Self {
        Self { fail_at_stage }
    }
}

#[async_trait]
impl ExecutionEngine for FailingEngine {
    async fn execute(&self, tasks: &[TaskSpec]) -> Result<String, PipelineFailure> {
        for (index, _task) in tasks.iter().enumerate() {
            let stage = index + 1;
            if stage == self.fail_at_stage {
                return Err(PipelineFailure::execution(format!(
                    "simulated failure at stage {stage} of {}",
                    tasks.len()
                )));
            }
        }
        Ok("completed without reaching failure stage".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::provider::Message;

    #[tokio::test]
    async fn test_mock_provider_replays_in_order() {
        let provider =
            MockLlmProvider::with_responses(vec!["first".to_string(), "second".to_string()]);

        let request = CompletionRequest {
            messages: vec![Message::user("hi")],
            model: "mock-model".to_string(),
            max_tokens: None,
            temperature: None,
        };

        let first = provider.complete(request.clone()).await.unwrap();
        let second = provider.complete(request.clone()).await.unwrap();
        assert_eq!(first.content.as_deref(), Some("first"));
        assert_eq!(second.content.as_deref(), Some("second"));

        let third = provider.complete(request).await;
        assert!(matches!(third, Err(LlmError::RequestFailed(_))));
        assert_eq!(provider.requests().len(), 3);
    }

    #[tokio::test]
    async fn test_mock_search_records_queries() {
        let tool = MockSearchTool::with_results(vec![SearchResult {
            title: "t".to_string(),
            url: "https://example.com".to_string(),
            snippet: "s".to_string(),
        }]);

        let results = tool.search("query one").await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(tool.queries(), vec!["query one"]);
    }

    #[tokio::test]
    async fn test_failing_engine_fails_at_configured_stage() {
        use crate::agents::{AgentRoster, PipelineVariant};
        use crate::pipeline::build_tasks;

        let roster = AgentRoster::build(PipelineVariant::Full, "Acme Corp", "Logistics").unwrap();
        let tasks = build_tasks(&roster, "Acme Corp", "Logistics");

        let engine = FailingEngine::at_stage(2);
        let result = engine.execute(&tasks).await;

        match result {
            Err(PipelineFailure::Execution(message)) => {
                assert!(message.contains("stage 2 of 4"));
            }
            other => panic!("Expected execution failure, got {other:?}"),
        }
    }
}
