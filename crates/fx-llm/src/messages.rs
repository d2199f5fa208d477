//! Message types for messages-API communication
//!
//! The content-block variants cover what the web-search completion flow
//! actually returns: plain text, server-side tool invocations, and the
//! search results the server feeds back to the model. Consumers only read
//! the text blocks; the rest is carried so a well-formed envelope always
//! deserializes.

use serde::{Deserialize, Serialize};

/// Message role in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// User message
    User,
    /// Assistant message
    Assistant,
}

/// Content block in a message
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    /// Plain text content
    Text {
        /// Text content
        text: String,
    },

    /// Server-side tool invocation issued by the model
    ServerToolUse {
        /// Unique ID for this tool use
        id: String,
        /// Tool name
        name: String,
        /// Tool input parameters (JSON)
        input: serde_json::Value,
    },

    /// Result of a server-side web search, echoed into the response
    WebSearchToolResult {
        /// ID of the tool use this result answers
        tool_use_id: String,
        /// Raw result payload; never inspected by this crate
        #[serde(default)]
        content: serde_json::Value,
    },
}

/// Message content: either simple text or structured blocks
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    /// Simple text content
    Text(String),
    /// Structured content blocks
    Blocks(Vec<ContentBlock>),
}

/// A message in the conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Message role
    pub role: Role,

    /// Message content
    pub content: MessageContent,
}

impl Message {
    /// Create a user message with text
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: MessageContent::Text(text.into()),
        }
    }

    /// Create an assistant message with text
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: MessageContent::Text(text.into()),
        }
    }

    /// Concatenate every text block, joined by newlines, in response order.
    ///
    /// Non-text blocks (tool invocations, search results) are skipped.
    /// Returns an empty string when the message carries no text at all.
    pub fn collect_text(&self) -> String {
        match &self.content {
            MessageContent::Text(s) => s.clone(),
            MessageContent::Blocks(blocks) => blocks
                .iter()
                .filter_map(|b| match b {
                    ContentBlock::Text { text } => Some(text.as_str()),
                    _ => None,
                })
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_message() {
        let msg = Message::user("Hello");
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.collect_text(), "Hello");
    }

    #[test]
    fn test_collect_text_joins_blocks() {
        let msg = Message {
            role: Role::Assistant,
            content: MessageContent::Blocks(vec![
                ContentBlock::ServerToolUse {
                    id: "srvtoolu_1".to_string(),
                    name: "web_search".to_string(),
                    input: json!({"query": "EURUSD price today"}),
                },
                ContentBlock::Text {
                    text: "A".to_string(),
                },
                ContentBlock::Text {
                    text: "B".to_string(),
                },
            ]),
        };
        assert_eq!(msg.collect_text(), "A\nB");
    }

    #[test]
    fn test_collect_text_without_text_blocks() {
        let msg = Message {
            role: Role::Assistant,
            content: MessageContent::Blocks(vec![ContentBlock::WebSearchToolResult {
                tool_use_id: "srvtoolu_1".to_string(),
                content: json!([]),
            }]),
        };
        assert_eq!(msg.collect_text(), "");
    }

    #[test]
    fn test_content_block_deserialization() {
        let raw = json!([
            {"type": "server_tool_use", "id": "x", "name": "web_search", "input": {}},
            {"type": "web_search_tool_result", "tool_use_id": "x", "content": []},
            {"type": "text", "text": "summary"}
        ]);
        let blocks: Vec<ContentBlock> = serde_json::from_value(raw).unwrap();
        assert_eq!(blocks.len(), 3);
        assert!(matches!(blocks[2], ContentBlock::Text { .. }));
    }

    #[test]
    fn test_message_serialization() {
        let msg = Message::user("Test");
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"role\":\"user\""));
        let deserialized: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.collect_text(), "Test");
    }
}
