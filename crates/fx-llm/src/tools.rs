//! Server-tool declarations for messages-API requests

use serde::{Deserialize, Serialize};

/// Versioned type identifier for the hosted web-search tool
const WEB_SEARCH_TYPE: &str = "web_search_20250305";

/// A server-side tool attached to a completion request
///
/// Unlike client tools, server tools carry no input schema: the API hosts
/// the implementation and only needs the versioned type plus a name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerTool {
    /// Versioned tool type identifier
    #[serde(rename = "type")]
    pub kind: String,

    /// Tool name
    pub name: String,
}

impl ServerTool {
    /// The hosted web-search tool
    pub fn web_search() -> Self {
        Self {
            kind: WEB_SEARCH_TYPE.to_string(),
            name: "web_search".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_web_search_serialization() {
        let tool = ServerTool::web_search();
        let json = serde_json::to_value(&tool).unwrap();
        assert_eq!(json["type"], "web_search_20250305");
        assert_eq!(json["name"], "web_search");
    }
}
