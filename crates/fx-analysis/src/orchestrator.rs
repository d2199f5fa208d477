//! Analysis run orchestration
//!
//! The orchestrator is the only stateful component in the pipeline. It
//! owns the run lifecycle as a single state value published on a watch
//! channel, so observers can never see contradictory flag combinations
//! (e.g. running with a populated report).
//!
//! Re-invocation while a run is in flight is discard-and-restart: the new
//! run takes over the channel and the stale run's eventual outcome is
//! dropped. In-flight HTTP calls are not aborted; their results simply go
//! unpublished.

use crate::config::AnalyzerConfig;
use crate::error::{AnalysisError, ErrorKind, Result};
use crate::instrument::{self, Instrument};
use crate::queries;
use crate::report::{self, AnalysisReport};
use crate::retrieval::RetrievalClient;
use crate::synthesis::ReportSynthesizer;
use fx_llm::LlmProvider;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::watch;
use tracing::{error, info, instrument as trace_span};

/// Lifecycle state of the orchestrator
///
/// Transitions only through [`AnalysisOrchestrator::analyze`]:
/// `Idle -> Running -> Succeeded | Failed`, with any terminal state
/// re-entering `Running` on the next invocation. A `Succeeded` state
/// always carries a complete report; there are no partial results.
#[derive(Debug, Clone, PartialEq)]
pub enum OrchestrationState {
    /// No run has been requested yet
    Idle,
    /// A run is in flight
    Running,
    /// The last run produced a report
    Succeeded(AnalysisReport),
    /// The last run failed at the given stage
    Failed(ErrorKind),
}

/// Sequences query building, retrieval, synthesis, and decoding
///
/// One run at a time per instance; the components it drives are stateless
/// and shared. Cheap to observe: state reads and subscriptions never
/// block a run.
pub struct AnalysisOrchestrator {
    retrieval: RetrievalClient,
    synthesizer: ReportSynthesizer,
    state: watch::Sender<OrchestrationState>,
    generation: AtomicU64,
}

impl AnalysisOrchestrator {
    /// Create an orchestrator over the given provider
    pub fn new(provider: Arc<dyn LlmProvider>, config: AnalyzerConfig) -> Self {
        let (state, _) = watch::channel(OrchestrationState::Idle);
        Self {
            retrieval: RetrievalClient::new(Arc::clone(&provider), config.clone()),
            synthesizer: ReportSynthesizer::new(provider, config),
            state,
            generation: AtomicU64::new(0),
        }
    }

    /// The current lifecycle state
    pub fn state(&self) -> OrchestrationState {
        self.state.borrow().clone()
    }

    /// Subscribe to state transitions
    ///
    /// Every transition is published; receivers observing lazily may skip
    /// intermediate states but always see the latest.
    pub fn subscribe(&self) -> watch::Receiver<OrchestrationState> {
        self.state.subscribe()
    }

    /// Fire-and-forget entry point: spawn a run and observe state separately
    pub fn start(self: &Arc<Self>, symbol: impl Into<String>) {
        let this = Arc::clone(self);
        let symbol = symbol.into();
        tokio::spawn(async move {
            let _ = this.analyze(&symbol).await;
        });
    }

    /// Run one full analysis, driving the state machine to a terminal state
    ///
    /// An empty or unknown symbol fails validation immediately, without a
    /// `Running` transition and without touching the capability. Any stage
    /// failure short-circuits the remaining stages.
    #[trace_span(skip(self))]
    pub async fn analyze(&self, symbol: &str) -> Result<AnalysisReport> {
        // Taking a new generation invalidates any run still in flight.
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let selected = match validate_selection(symbol) {
            Ok(instrument) => instrument,
            Err(err) => {
                self.publish(generation, OrchestrationState::Failed(err.kind()));
                return Err(err);
            }
        };

        self.publish(generation, OrchestrationState::Running);
        info!(symbol = selected.symbol, "analysis run started");

        match self.run_pipeline(selected).await {
            Ok(analysis) => {
                info!(symbol = selected.symbol, "analysis run succeeded");
                self.publish(generation, OrchestrationState::Succeeded(analysis.clone()));
                Ok(analysis)
            }
            Err(err) => {
                error!(symbol = selected.symbol, error = %err, "analysis run failed");
                self.publish(generation, OrchestrationState::Failed(err.kind()));
                Err(err)
            }
        }
    }

    async fn run_pipeline(&self, selected: &Instrument) -> Result<AnalysisReport> {
        let today = chrono::Local::now().date_naive();
        let query_list = queries::build(selected.symbol, today);

        // Strictly sequential: each lookup completes (or fails) before the
        // next starts, which keeps result order trivially aligned with
        // query order.
        let mut results = Vec::with_capacity(query_list.len());
        for query in &query_list {
            results.push(self.retrieval.retrieve(query).await?);
        }

        let raw = self.synthesizer.synthesize(selected, &results).await?;
        report::decode(&raw)
    }

    // State is published only by the run holding the newest generation;
    // anything older is stale and its outcome is discarded. The check and
    // the write happen together under the sender's lock, so a run that
    // passes the check cannot be overtaken by a newer run's publish
    // before its own write lands.
    fn publish(&self, generation: u64, state: OrchestrationState) {
        self.state.send_if_modified(|current| {
            if self.generation.load(Ordering::SeqCst) != generation {
                return false;
            }
            *current = state;
            true
        });
    }
}

fn validate_selection(symbol: &str) -> Result<&'static Instrument> {
    if symbol.trim().is_empty() {
        return Err(AnalysisError::Validation(
            "no instrument selected".to_string(),
        ));
    }
    instrument::find(symbol)
        .ok_or_else(|| AnalysisError::Validation(format!("unknown symbol: {symbol}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use fx_llm::{CompletionRequest, CompletionResponse, LlmError};

    struct UnreachableProvider;

    #[async_trait]
    impl LlmProvider for UnreachableProvider {
        async fn complete(
            &self,
            _request: CompletionRequest,
        ) -> fx_llm::Result<CompletionResponse> {
            Err(LlmError::RequestFailed(
                "provider must not be called".to_string(),
            ))
        }

        fn name(&self) -> &str {
            "unreachable"
        }
    }

    fn orchestrator() -> AnalysisOrchestrator {
        AnalysisOrchestrator::new(Arc::new(UnreachableProvider), AnalyzerConfig::default())
    }

    #[test]
    fn test_initial_state_is_idle() {
        assert_eq!(orchestrator().state(), OrchestrationState::Idle);
    }

    #[tokio::test]
    async fn test_empty_symbol_fails_validation_without_running() {
        let orchestrator = orchestrator();
        let mut rx = orchestrator.subscribe();

        let err = orchestrator.analyze("").await.expect_err("must fail");
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(
            orchestrator.state(),
            OrchestrationState::Failed(ErrorKind::Validation)
        );

        // Exactly one transition was published; Running never appeared.
        rx.changed().await.expect("one transition");
        assert_eq!(*rx.borrow(), OrchestrationState::Failed(ErrorKind::Validation));
        assert!(!rx.has_changed().expect("channel open"));
    }

    #[tokio::test]
    async fn test_unknown_symbol_fails_validation() {
        let orchestrator = orchestrator();
        let err = orchestrator.analyze("DOGEUSD").await.expect_err("must fail");
        assert!(err.to_string().contains("unknown symbol: DOGEUSD"));
        assert_eq!(
            orchestrator.state(),
            OrchestrationState::Failed(ErrorKind::Validation)
        );
    }

    #[test]
    fn test_validate_selection_accepts_catalog_symbol() {
        let selected = validate_selection("EURUSD").expect("catalog symbol");
        assert_eq!(selected.display_name, "EUR/USD");
    }
}
