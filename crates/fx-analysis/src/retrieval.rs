//! Web-search retrieval client

use crate::config::AnalyzerConfig;
use crate::error::{AnalysisError, Result};
use crate::prompts;
use crate::queries::{RetrievalQuery, RetrievalResult};
use fx_llm::{CompletionRequest, LlmProvider, Message, ServerTool};
use std::sync::Arc;
use tracing::debug;

/// Issues one web-search completion per query
///
/// Stateless apart from its provider handle; safe to share across
/// concurrent orchestrators. No retries: a single failure surfaces
/// immediately with the originating query attached.
pub struct RetrievalClient {
    provider: Arc<dyn LlmProvider>,
    config: AnalyzerConfig,
}

impl RetrievalClient {
    /// Create a new retrieval client
    pub fn new(provider: Arc<dyn LlmProvider>, config: AnalyzerConfig) -> Self {
        Self { provider, config }
    }

    /// Run one retrieval call and extract its summary text
    ///
    /// The result slot is always populated on success, even when the
    /// capability returned no text blocks at all.
    pub async fn retrieve(&self, query: &RetrievalQuery) -> Result<RetrievalResult> {
        debug!(query = %query.text, "issuing retrieval call");

        let request = CompletionRequest::builder(&self.config.model)
            .add_message(Message::user(prompts::retrieval_prompt(query)))
            .max_tokens(self.config.retrieval_max_tokens)
            .tools(vec![ServerTool::web_search()])
            .build();

        let response =
            self.provider
                .complete(request)
                .await
                .map_err(|source| AnalysisError::Retrieval {
                    query: query.text.clone(),
                    source,
                })?;

        Ok(RetrievalResult {
            query: query.clone(),
            text: response.message.collect_text(),
        })
    }
}
