//! Error types for the analysis pipeline

use fx_llm::LlmError;
use thiserror::Error;

/// Result type alias for analysis operations
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Errors produced by the analysis pipeline
///
/// Every variant maps to exactly one [`ErrorKind`]; the orchestrator
/// surfaces the kind in its terminal `Failed` state while the full error
/// goes to the log.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// No usable instrument was selected
    #[error("invalid instrument selection: {0}")]
    Validation(String),

    /// A single information-lookup call failed
    #[error("retrieval failed for query '{query}': {source}")]
    Retrieval {
        query: String,
        #[source]
        source: LlmError,
    },

    /// The synthesis call failed
    #[error("synthesis request failed: {0}")]
    Synthesis(#[source] LlmError),

    /// The synthesis answer was not a valid report
    #[error("failed to decode synthesis output: {0}")]
    Decode(String),
}

impl AnalysisError {
    /// The lightweight kind carried in orchestrator state
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::Retrieval { .. } => ErrorKind::Retrieval,
            Self::Synthesis(_) => ErrorKind::Synthesis,
            Self::Decode(_) => ErrorKind::Decode,
        }
    }
}

/// Which pipeline stage failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// No instrument selected or symbol unknown
    Validation,
    /// An information-lookup call failed
    Retrieval,
    /// The synthesis call failed
    Synthesis,
    /// The synthesis answer could not be decoded
    Decode,
}
