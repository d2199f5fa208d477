//! Capability client layer for fx-analyzer
//!
//! This crate wraps the Anthropic messages API behind a small provider
//! abstraction. It includes:
//!
//! - Message and content-block types for API communication
//! - Completion request/response types
//! - Server-tool declarations (web search)
//! - The `LlmProvider` trait and the concrete Anthropic provider

pub mod completion;
pub mod error;
pub mod messages;
pub mod provider;
pub mod providers;
pub mod tools;

// Re-export main types
pub use completion::{CompletionRequest, CompletionResponse, StopReason, TokenUsage};
pub use error::{LlmError, Result};
pub use messages::{ContentBlock, Message, MessageContent, Role};
pub use provider::LlmProvider;
pub use providers::AnthropicProvider;
pub use tools::ServerTool;
