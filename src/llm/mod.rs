//! LLM provider abstraction and backends

pub mod provider;
pub mod providers;

pub use provider::{
    CompletionRequest, CompletionResponse, FinishReason, LlmError, LlmProvider, Message,
    MessageRole, TokenUsage,
};
