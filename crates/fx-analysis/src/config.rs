//! Configuration for analysis runs

use serde::{Deserialize, Serialize};

/// Default model for both retrieval and synthesis calls
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";

/// Configuration for the analysis pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Model identifier used for every capability call
    pub model: String,

    /// Token budget for each web-search retrieval call
    pub retrieval_max_tokens: usize,

    /// Token budget for the synthesis call
    pub synthesis_max_tokens: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            retrieval_max_tokens: 1000,
            synthesis_max_tokens: 4000,
        }
    }
}

impl AnalyzerConfig {
    /// Create a new configuration builder
    pub fn builder() -> AnalyzerConfigBuilder {
        AnalyzerConfigBuilder::default()
    }
}

/// Builder for [`AnalyzerConfig`]
#[derive(Debug, Default)]
pub struct AnalyzerConfigBuilder {
    model: Option<String>,
    retrieval_max_tokens: Option<usize>,
    synthesis_max_tokens: Option<usize>,
}

impl AnalyzerConfigBuilder {
    /// Override the model identifier
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Override the retrieval token budget
    pub fn retrieval_max_tokens(mut self, max_tokens: usize) -> Self {
        self.retrieval_max_tokens = Some(max_tokens);
        self
    }

    /// Override the synthesis token budget
    pub fn synthesis_max_tokens(mut self, max_tokens: usize) -> Self {
        self.synthesis_max_tokens = Some(max_tokens);
        self
    }

    /// Build the configuration, falling back to defaults
    pub fn build(self) -> AnalyzerConfig {
        let defaults = AnalyzerConfig::default();
        AnalyzerConfig {
            model: self.model.unwrap_or(defaults.model),
            retrieval_max_tokens: self
                .retrieval_max_tokens
                .unwrap_or(defaults.retrieval_max_tokens),
            synthesis_max_tokens: self
                .synthesis_max_tokens
                .unwrap_or(defaults.synthesis_max_tokens),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.retrieval_max_tokens, 1000);
        assert_eq!(config.synthesis_max_tokens, 4000);
    }

    #[test]
    fn test_builder_overrides() {
        let config = AnalyzerConfig::builder()
            .model("claude-test")
            .synthesis_max_tokens(2000)
            .build();
        assert_eq!(config.model, "claude-test");
        assert_eq!(config.synthesis_max_tokens, 2000);
        assert_eq!(config.retrieval_max_tokens, 1000);
    }
}
