//! Task pipeline construction and execution engine interface
//!
//! A task pairs one agent with one templated instruction and an advisory
//! expected-output contract. Tasks are built in roster order and executed
//! strictly sequentially; inter-stage data flows only through the transcript
//! the engine accumulates.

use crate::agents::{AgentRoster, AgentSpec, PipelineVariant};
use crate::error::PipelineFailure;
use crate::prompts;
use async_trait::async_trait;

pub mod sequential;

pub use sequential::SequentialEngine;

/// One templated instruction bound to one agent
#[derive(Debug, Clone)]
pub struct TaskSpec {
    pub description: String,
    pub agent: AgentSpec,
    /// Free-text contract, advisory only; never validated against the output
    pub expected_output: String,
}

/// Build one task per roster agent, in roster order
///
/// Invariant: `tasks[i].agent == roster[i]` for every index.
pub fn build_tasks(roster: &AgentRoster, company: &str, industry: &str) -> Vec<TaskSpec> {
    let agents = roster.as_slice();

    match roster.variant() {
        PipelineVariant::Single => vec![TaskSpec {
            description: prompts::resource_guide(company, industry),
            agent: agents[0].clone(),
            expected_output: prompts::resource_guide_expected_output(),
        }],
        PipelineVariant::Full => vec![
            TaskSpec {
                description: prompts::identify_use_cases(company, industry),
                agent: agents[0].clone(),
                expected_output: prompts::identify_use_cases_expected_output(),
            },
            TaskSpec {
                description: prompts::implementation_resources(company),
                agent: agents[1].clone(),
                expected_output: prompts::implementation_resources_expected_output(),
            },
            TaskSpec {
                description: prompts::datasets_and_code(company),
                agent: agents[2].clone(),
                expected_output: prompts::datasets_and_code_expected_output(),
            },
            TaskSpec {
                description: prompts::final_table(company),
                agent: agents[3].clone(),
                expected_output: prompts::final_table_expected_output(),
            },
        ],
    }
}

/// Execution engine interface
///
/// Submits the ordered task sequence with strictly sequential semantics and
/// collects the final stage's textual artifact. Implementations decide how a
/// stage talks to the model and the search tool.
#[async_trait]
pub trait ExecutionEngine: Send + Sync {
    async fn execute(&self, tasks: &[TaskSpec]) -> Result<String, PipelineFailure>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_task_per_agent_same_order_single() {
        let roster = AgentRoster::build(PipelineVariant::Single, "Acme Corp", "Logistics").unwrap();
        let tasks = build_tasks(&roster, "Acme Corp", "Logistics");

        assert_eq!(tasks.len(), roster.len());
        assert_eq!(tasks[0].agent, roster.as_slice()[0]);
    }

    #[test]
    fn test_one_task_per_agent_same_order_full() {
        let roster = AgentRoster::build(PipelineVariant::Full, "Acme Corp", "Logistics").unwrap();
        let tasks = build_tasks(&roster, "Acme Corp", "Logistics");

        assert_eq!(tasks.len(), 4);
        for (task, agent) in tasks.iter().zip(roster.iter()) {
            assert_eq!(&task.agent, agent);
        }
    }

    #[test]
    fn test_task_descriptions_reference_company() {
        let roster = AgentRoster::build(PipelineVariant::Full, "Acme Corp", "Logistics").unwrap();
        let tasks = build_tasks(&roster, "Acme Corp", "Logistics");

        for task in &tasks {
            assert!(task.description.contains("Acme Corp"));
            assert!(!task.expected_output.trim().is_empty());
        }
    }

    #[test]
    fn test_final_full_task_is_the_table_stage() {
        let roster = AgentRoster::build(PipelineVariant::Full, "Acme Corp", "Logistics").unwrap();
        let tasks = build_tasks(&roster, "Acme Corp", "Logistics");

        let last = tasks.last().unwrap();
        assert_eq!(last.agent.role, "Integration Specialist");
        assert!(last.description.contains("ONE TABLE"));
    }
}
