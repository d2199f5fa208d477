//! Market-analysis orchestration pipeline
//!
//! This crate turns an instrument symbol into a structured trading-analysis
//! report. The pipeline is strictly sequential:
//!
//! 1. Build a fixed set of six retrieval queries for the symbol and date
//! 2. Run one web-search completion per query, in order
//! 3. Feed the aggregated findings into a single synthesis completion that
//!    must answer with a JSON report
//! 4. Decode and shape-validate the answer into [`report::AnalysisReport`]
//!
//! [`orchestrator::AnalysisOrchestrator`] owns the run lifecycle and
//! publishes every state transition on a watch channel. All other
//! components are stateless request/response functions over an
//! [`fx_llm::LlmProvider`].

pub mod config;
pub mod error;
pub mod instrument;
pub mod orchestrator;
pub mod prompts;
pub mod queries;
pub mod report;
pub mod retrieval;
pub mod synthesis;

// Re-export main types for convenience
pub use config::AnalyzerConfig;
pub use error::{AnalysisError, ErrorKind, Result};
pub use instrument::Instrument;
pub use orchestrator::{AnalysisOrchestrator, OrchestrationState};
pub use queries::{RetrievalQuery, RetrievalResult};
pub use report::{AnalysisReport, TechnicalAnalysis, TradeScenario, Trend};
pub use retrieval::RetrievalClient;
pub use synthesis::ReportSynthesizer;
