//! Configuration for the market research pipeline
//!
//! Loaded from a TOML file (`research.toml` by default). API keys are never
//! stored in the file itself; the config names the environment variables that
//! hold them, and the resolved values are passed explicitly into the client
//! constructors. Nothing here mutates process-wide environment state.

use crate::agents::PipelineVariant;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Top-level configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResearchConfig {
    pub research: ResearchSection,
    #[serde(default)]
    pub llm: LlmSection,
    #[serde(default)]
    pub search: SearchSection,
}

/// Research subject and output settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResearchSection {
    /// Company the report is about
    pub company: String,
    /// Industry context for the agents
    pub industry: String,
    /// Pipeline variant: "single" (one agent) or "full" (four agents)
    #[serde(default)]
    pub variant: PipelineVariant,
    /// Directory where report files are written
    #[serde(default = "default_reports_dir")]
    pub reports_dir: PathBuf,
}

fn default_reports_dir() -> PathBuf {
    PathBuf::from("reports")
}

/// Language model settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LlmSection {
    /// Model identifier
    #[serde(default = "default_model")]
    pub model: String,
    /// Environment variable containing the API key
    #[serde(default = "default_llm_api_key_env")]
    pub api_key_env: String,
    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Completion token cap per stage
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

fn default_model() -> String {
    "gpt-4-turbo-preview".to_string()
}

fn default_llm_api_key_env() -> String {
    "OPENAI_API_KEY".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_tokens() -> u32 {
    4000
}

impl Default for LlmSection {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_key_env: default_llm_api_key_env(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
        }
    }
}

/// Web search settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchSection {
    /// Environment variable containing the API key
    #[serde(default = "default_search_api_key_env")]
    pub api_key_env: String,
    /// Results per query; when absent the variant default applies
    /// (5 for single-agent, 8 for the full roster)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<usize>,
    /// Search depth passed through to the search API
    #[serde(default = "default_search_depth")]
    pub search_depth: String,
}

fn default_search_api_key_env() -> String {
    "TAVILY_API_KEY".to_string()
}

fn default_search_depth() -> String {
    "advanced".to_string()
}

impl Default for SearchSection {
    fn default() -> Self {
        Self {
            api_key_env: default_search_api_key_env(),
            max_results: None,
            search_depth: default_search_depth(),
        }
    }
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("Environment variable not found: {0}")]
    EnvVarNotFound(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ResearchConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: ResearchConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate required fields
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.research.company.trim().is_empty() {
            return Err(ConfigError::InvalidConfig(
                "research.company must not be empty".to_string(),
            ));
        }
        if self.research.industry.trim().is_empty() {
            return Err(ConfigError::InvalidConfig(
                "research.industry must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Effective search result count for the configured variant
    pub fn search_max_results(&self) -> usize {
        self.search
            .max_results
            .unwrap_or_else(|| self.research.variant.default_max_results())
    }

    /// Resolve the LLM API key from the configured environment variable
    pub fn get_llm_api_key(&self) -> Result<String, ConfigError> {
        Self::get_env_var_required(&self.llm.api_key_env)
    }

    /// Resolve the search API key from the configured environment variable
    pub fn get_search_api_key(&self) -> Result<String, ConfigError> {
        Self::get_env_var_required(&self.search.api_key_env)
    }

    fn get_env_var_required(env_var_name: &str) -> Result<String, ConfigError> {
        std::env::var(env_var_name)
            .map_err(|_| ConfigError::EnvVarNotFound(env_var_name.to_string()))
    }

    /// Create a test configuration for unit testing
    #[cfg(test)]
    pub fn test_config() -> Self {
        let toml_content = r#"
[research]
company = "Acme Corp"
industry = "Logistics"
variant = "full"

[llm]
model = "gpt-4-turbo-preview"
api_key_env = "OPENAI_API_KEY"
temperature = 0.7
max_tokens = 4000

[search]
api_key_env = "TAVILY_API_KEY"
search_depth = "advanced"
"#;
        toml::from_str(toml_content).expect("Test config should parse")
    }
}
