//! LLM provider backends

pub mod openai;

pub use openai::{OpenAiConfig, OpenAiProvider};
