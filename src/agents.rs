//! Agent roster construction
//!
//! An agent is a named role persona bound to the shared model/search pair at
//! execution time. Rosters are fixed per pipeline variant: one generalist
//! agent, or four specialists whose outputs build on each other in order.

use crate::error::PipelineFailure;
use serde::{Deserialize, Serialize};

/// Pipeline variant selecting the roster size and template set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PipelineVariant {
    /// One resource specialist producing the full guide in a single stage
    Single,
    /// Four-stage roster: analyst, architect, data specialist, integrator
    #[default]
    Full,
}

impl PipelineVariant {
    /// Number of agents (and therefore stages) for this variant
    pub fn stage_count(&self) -> usize {
        match self {
            PipelineVariant::Single => 1,
            PipelineVariant::Full => 4,
        }
    }

    /// Default web search result count per query for this variant
    pub fn default_max_results(&self) -> usize {
        match self {
            PipelineVariant::Single => 5,
            PipelineVariant::Full => 8,
        }
    }
}

/// Role descriptor for one pipeline stage
///
/// Immutable after construction. The model client and search tool are shared
/// engine collaborators rather than per-agent fields.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentSpec {
    pub role: String,
    pub goal: String,
    pub backstory: String,
}

/// Ordered set of agents for one run
#[derive(Debug, Clone)]
pub struct AgentRoster {
    variant: PipelineVariant,
    agents: Vec<AgentSpec>,
}

impl AgentRoster {
    /// Build the roster for a variant
    ///
    /// Construction cannot fail except on missing required fields: empty or
    /// whitespace-only company/industry is rejected before any template is
    /// filled.
    pub fn build(
        variant: PipelineVariant,
        company: &str,
        industry: &str,
    ) -> Result<Self, PipelineFailure> {
        if company.trim().is_empty() {
            return Err(PipelineFailure::construction("company must not be empty"));
        }
        if industry.trim().is_empty() {
            return Err(PipelineFailure::construction("industry must not be empty"));
        }

        let agents = match variant {
            PipelineVariant::Single => single_roster(company, industry),
            PipelineVariant::Full => full_roster(company, industry),
        };

        Ok(Self { variant, agents })
    }

    pub fn variant(&self) -> PipelineVariant {
        self.variant
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn as_slice(&self) -> &[AgentSpec] {
        &self.agents
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AgentSpec> {
        self.agents.iter()
    }
}

fn single_roster(company: &str, industry: &str) -> Vec<AgentSpec> {
    vec![AgentSpec {
        role: "AI Implementation Resource Specialist".to_string(),
        goal: format!("Find practical AI implementation resources for {company}"),
        backstory: format!(
            "Expert in identifying practical AI implementation resources and use cases. \
             Deep knowledge of the {industry} industry and its technical requirements. \
             Specializes in finding real-world examples, implementations, and relevant datasets."
        ),
    }]
}

fn full_roster(company: &str, industry: &str) -> Vec<AgentSpec> {
    vec![
        AgentSpec {
            role: "Research Analyst".to_string(),
            goal: format!("Identify optimal AI use cases for {company}"),
            backstory: format!(
                "Senior industry analyst specializing in {industry}. Tracks how market \
                 leaders deploy AI across operations, customer experience, and R&D, and \
                 knows which initiatives deliver measurable impact."
            ),
        },
        AgentSpec {
            role: "Technical Architect".to_string(),
            goal: format!("Find official {company} implementation resources"),
            backstory: format!(
                "Senior technical architect with hands-on experience delivering AI systems \
                 in the {industry} sector. Evaluates vendor documentation, reference \
                 architectures, and deployment guides for production readiness."
            ),
        },
        AgentSpec {
            role: "Data & Training Specialist".to_string(),
            goal: format!("Find relevant datasets and code for {company} use cases"),
            backstory: format!(
                "Data scientist specializing in sourcing training data and open \
                 implementations for {industry} applications. Knows where the usable \
                 datasets and reference repositories live on Kaggle, GitHub, and HuggingFace."
            ),
        },
        AgentSpec {
            role: "Integration Specialist".to_string(),
            goal: format!("Create a comprehensive implementation table for {company} covering all use cases"),
            backstory: format!(
                "Technical documentation expert who consolidates research findings into \
                 actionable implementation guides. Familiar with how {industry} teams \
                 consume and act on technical recommendations."
            ),
        },
    ]
}
