//! Sequential execution engine
//!
//! Runs the ordered tasks one at a time against a shared LLM provider and
//! search tool. Stage N+1 does not begin until stage N's output is in the
//! transcript, and every stage sees the accumulated outputs of all prior
//! stages in its prompt. There is no concurrency, no cancellation, and no
//! timeout beyond what the HTTP clients enforce themselves.

use crate::error::PipelineFailure;
use crate::llm::provider::{CompletionRequest, LlmProvider, Message};
use crate::pipeline::{ExecutionEngine, TaskSpec};
use crate::search::{format_findings, SearchTool};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, Instrument};

/// Model parameters applied to every stage request
#[derive(Debug, Clone)]
pub struct StageModel {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for StageModel {
    fn default() -> Self {
        Self {
            model: "gpt-4-turbo-preview".to_string(),
            temperature: 0.7,
            max_tokens: 4000,
        }
    }
}

/// Engine that feeds each stage's accumulated transcript into the next
pub struct SequentialEngine {
    provider: Arc<dyn LlmProvider>,
    search: Arc<dyn SearchTool>,
    model: StageModel,
}

impl SequentialEngine {
    pub fn new(
        provider: Arc<dyn LlmProvider>,
        search: Arc<dyn SearchTool>,
        model: StageModel,
    ) -> Self {
        Self {
            provider,
            search,
            model,
        }
    }

    /// Build the system persona for an agent (pure function)
    fn persona(task: &TaskSpec) -> String {
        format!(
            "You are a {role}. {backstory}\n\nYour goal: {goal}",
            role = task.agent.role,
            backstory = task.agent.backstory,
            goal = task.agent.goal
        )
    }

    /// Compose the user prompt for a stage (pure function)
    ///
    /// Prior stage outputs are included verbatim so the model can build on
    /// them; this is the only channel between stages.
    fn compose_user_prompt(task: &TaskSpec, findings: &str, transcript: &[(String, String)]) -> String {
        let mut prompt = String::new();

        if !transcript.is_empty() {
            prompt.push_str("Outputs from the previous stages of this research pipeline:\n\n");
            for (role, output) in transcript {
                prompt.push_str(&format!("## Output from {role}\n{output}\n\n"));
            }
        }

        prompt.push_str(&format!("{findings}\n\n"));
        prompt.push_str(&task.description);
        prompt.push_str(&format!("\n\nExpected output: {}", task.expected_output));
        prompt
    }
}

#[async_trait]
impl ExecutionEngine for SequentialEngine {
    async fn execute(&self, tasks: &[TaskSpec]) -> Result<String, PipelineFailure> {
        if tasks.is_empty() {
            return Err(PipelineFailure::execution("no tasks to execute"));
        }

        let mut transcript: Vec<(String, String)> = Vec::with_capacity(tasks.len());

        for (index, task) in tasks.iter().enumerate() {
            let stage = index + 1;
            let span = crate::stage_span!(stage, role = %task.agent.role);

            let output = async {
                info!(
                    stage,
                    total = tasks.len(),
                    role = %task.agent.role,
                    "Starting pipeline stage"
                );

                // One search per stage; the goal string embeds the company name
                let results = self.search.search(&task.agent.goal).await?;
                let findings = format_findings(&results);
                debug!(stage, result_count = results.len(), "Search findings collected");

                let request = CompletionRequest {
                    messages: vec![
                        Message::system(Self::persona(task)),
                        Message::user(Self::compose_user_prompt(task, &findings, &transcript)),
                    ],
                    model: self.model.model.clone(),
                    max_tokens: Some(self.model.max_tokens),
                    temperature: Some(self.model.temperature),
                };

                let response = self.provider.complete(request).await?;
                let output = response
                    .content
                    .filter(|c| !c.trim().is_empty())
                    .ok_or_else(|| {
                        PipelineFailure::execution(format!("stage {stage} returned no content"))
                    })?;

                debug!(
                    stage,
                    tokens = response.usage.total_tokens,
                    "Pipeline stage completed"
                );
                Ok::<String, PipelineFailure>(output)
            }
            .instrument(span)
            .await?;

            transcript.push((task.agent.role.clone(), output));
        }

        // Non-empty by construction: every stage pushed exactly one entry
        Ok(transcript
            .last()
            .map(|(_, output)| output.clone())
            .unwrap_or_default())
    }
}
