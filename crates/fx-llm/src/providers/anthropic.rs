//! Anthropic messages-API provider
//!
//! See: https://docs.anthropic.com/en/api/messages

use crate::{
    CompletionRequest, CompletionResponse, ContentBlock, LlmError, LlmProvider, Message,
    MessageContent, Result, Role, StopReason, TokenUsage,
};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

const ANTHROPIC_API_BASE: &str = "https://api.anthropic.com/v1";
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Anthropic messages-API provider
pub struct AnthropicProvider {
    client: Client,
    api_key: String,
}

impl AnthropicProvider {
    /// Create a new Anthropic provider with the given API key
    pub fn new(api_key: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()?;

        Ok(Self { client, api_key })
    }

    /// Create a provider from the `ANTHROPIC_API_KEY` environment variable
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("ANTHROPIC_API_KEY").map_err(|_| {
            LlmError::ConfigurationError(
                "ANTHROPIC_API_KEY environment variable not set".to_string(),
            )
        })?;
        Self::new(api_key)
    }
}

#[async_trait]
impl LlmProvider for AnthropicProvider {
    #[instrument(skip(self, request), fields(model = %request.model))]
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse> {
        debug!("Sending request to Anthropic API");

        let model = request.model.clone();
        let response = self
            .client
            .post(format!("{ANTHROPIC_API_BASE}/messages"))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;

            return Err(match status.as_u16() {
                401 => LlmError::AuthenticationFailed,
                429 => LlmError::RateLimitExceeded(error_text),
                400 => LlmError::InvalidRequest(error_text),
                404 => LlmError::ModelNotFound(model),
                _ => LlmError::RequestFailed(format!("HTTP {status}: {error_text}")),
            });
        }

        let envelope: MessagesEnvelope = response
            .json()
            .await
            .map_err(|e| LlmError::UnexpectedResponse(format!("Failed to parse response: {e}")))?;

        debug!(
            "Received response - stop_reason: {}, tokens: {}/{}",
            envelope.stop_reason, envelope.usage.input_tokens, envelope.usage.output_tokens
        );

        Ok(CompletionResponse {
            message: Message {
                role: Role::Assistant,
                content: MessageContent::Blocks(envelope.content),
            },
            stop_reason: match envelope.stop_reason.as_str() {
                "max_tokens" => StopReason::MaxTokens,
                "stop_sequence" => StopReason::StopSequence,
                "tool_use" => StopReason::ToolUse,
                "end_turn" => StopReason::EndTurn,
                other => {
                    debug!("Unknown stop reason: {}", other);
                    StopReason::EndTurn
                }
            },
            usage: TokenUsage {
                input_tokens: envelope.usage.input_tokens,
                output_tokens: envelope.usage.output_tokens,
            },
        })
    }

    fn name(&self) -> &'static str {
        "anthropic"
    }
}

// Wire format of a messages-API response. A response missing the content
// list (or carrying blocks of an unknown type) fails deserialization and
// surfaces as UnexpectedResponse.

#[derive(Debug, Deserialize)]
struct MessagesEnvelope {
    content: Vec<ContentBlock>,
    stop_reason: String,
    usage: UsageEnvelope,
}

#[derive(Debug, Deserialize)]
struct UsageEnvelope {
    input_tokens: usize,
    output_tokens: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_creation() {
        let provider = AnthropicProvider::new("test-key".to_string());
        assert!(provider.is_ok());
        assert_eq!(provider.unwrap().name(), "anthropic");
    }

    #[test]
    fn test_envelope_parsing() {
        let raw = r#"{
            "content": [
                {"type": "server_tool_use", "id": "s1", "name": "web_search", "input": {}},
                {"type": "text", "text": "EUR/USD trades at 1.09"}
            ],
            "stop_reason": "end_turn",
            "usage": {"input_tokens": 42, "output_tokens": 17}
        }"#;
        let envelope: MessagesEnvelope = serde_json::from_str(raw).unwrap();
        assert_eq!(envelope.content.len(), 2);
        assert_eq!(envelope.usage.input_tokens, 42);
    }

    #[test]
    fn test_envelope_missing_content_is_rejected() {
        let raw = r#"{"stop_reason": "end_turn", "usage": {"input_tokens": 1, "output_tokens": 1}}"#;
        assert!(serde_json::from_str::<MessagesEnvelope>(raw).is_err());
    }
}
