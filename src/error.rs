//! Error types for the market research pipeline
//!
//! Every failure in the pipeline collapses into [`PipelineFailure`], which is
//! caught exactly once at the run boundary and surfaced to the caller as a
//! null result triple. No distinction is made between transient and permanent
//! failures; the tool is advisory and a rerun is always acceptable.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Single failure taxonomy for the whole pipeline
#[derive(Debug, Error)]
pub enum PipelineFailure {
    #[error("Agent construction failed: {0}")]
    Construction(String),

    #[error("Stage execution failed: {0}")]
    Execution(String),

    #[error("Pipeline produced an empty result")]
    EmptyResult,

    #[error("LLM provider error: {0}")]
    Llm(#[from] crate::llm::provider::LlmError),

    #[error("Search tool error: {0}")]
    Search(#[from] crate::search::SearchError),

    #[error("Report I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

impl PipelineFailure {
    /// Create an agent construction error
    pub fn construction<S: Into<String>>(message: S) -> Self {
        Self::Construction(message.into())
    }

    /// Create a stage execution error
    pub fn execution<S: Into<String>>(message: S) -> Self {
        Self::Execution(message.into())
    }
}

static KEY_ASSIGNMENT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(password|token|key|secret)[=:]\s*\S+").expect("static pattern must compile")
});

static BARE_API_KEY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(sk|tvly)-[A-Za-z0-9_-]+").expect("static pattern must compile")
});

/// Redact secrets from error messages before they reach logs
///
/// API keys travel inside client configs and can leak through transport error
/// text. Key/token assignments and bare `sk-`/`tvly-` tokens are masked, and
/// messages are capped at 500 bytes.
pub fn redact_secrets(message: &str) -> String {
    let mut redacted = KEY_ASSIGNMENT_PATTERN
        .replace_all(message, "${1}=***")
        .to_string();

    redacted = BARE_API_KEY_PATTERN
        .replace_all(&redacted, "${1}-***")
        .to_string();

    if redacted.len() > 500 {
        let truncate_suffix = "...[truncated]";
        // Error text can embed arbitrary HTTP response bodies; the cut point
        // must not land inside a multi-byte character.
        let mut cut = 500 - truncate_suffix.len();
        while !redacted.is_char_boundary(cut) {
            cut -= 1;
        }
        redacted = format!("{}{}", &redacted[..cut], truncate_suffix);
    }

    redacted
}
