//! Report synthesis over aggregated retrieval text

use crate::config::AnalyzerConfig;
use crate::error::{AnalysisError, Result};
use crate::instrument::Instrument;
use crate::prompts;
use crate::queries::RetrievalResult;
use fx_llm::{CompletionRequest, LlmProvider, Message};
use std::sync::Arc;
use tracing::debug;

/// Builds the synthesis prompt and issues the single synthesis call
///
/// Returns the raw answer text: JSON-ness is not checked here, that is
/// the decoder's job. No tools are attached; the model works only from
/// the aggregated findings embedded in the prompt.
pub struct ReportSynthesizer {
    provider: Arc<dyn LlmProvider>,
    config: AnalyzerConfig,
}

impl ReportSynthesizer {
    /// Create a new synthesizer
    pub fn new(provider: Arc<dyn LlmProvider>, config: AnalyzerConfig) -> Self {
        Self { provider, config }
    }

    /// Run the synthesis call and extract its raw answer text
    pub async fn synthesize(
        &self,
        instrument: &Instrument,
        results: &[RetrievalResult],
    ) -> Result<String> {
        debug!(symbol = instrument.symbol, results = results.len(), "issuing synthesis call");

        let request = CompletionRequest::builder(&self.config.model)
            .add_message(Message::user(prompts::synthesis_prompt(
                instrument.symbol,
                results,
            )))
            .max_tokens(self.config.synthesis_max_tokens)
            .build();

        let response = self
            .provider
            .complete(request)
            .await
            .map_err(AnalysisError::Synthesis)?;

        Ok(response.message.collect_text())
    }
}
