//! Typed analysis report and its decoder
//!
//! The synthesis capability is free-text generation and is not guaranteed
//! to honor the requested schema, so everything it returns is treated as
//! untrusted: fence markers are stripped, the remainder must parse as
//! JSON, and the parsed value must pass shape validation before a report
//! is handed to anyone.

use crate::error::{AnalysisError, Result};
use serde::{Deserialize, Serialize};

/// Overall market direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    /// Upward bias
    Bullish,
    /// Downward bias
    Bearish,
    /// No directional bias
    Sideways,
}

/// Support/resistance levels plus an indicator summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalAnalysis {
    /// Resistance levels, nearest first (exactly 3)
    pub resistance: Vec<String>,

    /// Support levels, nearest first (exactly 3)
    pub support: Vec<String>,

    /// Indicator readout (RSI, MACD, moving averages, ...)
    pub indicators: String,
}

/// One directional trade setup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeScenario {
    /// Entry level
    pub entry: String,

    /// Stop-loss level
    pub stop_loss: String,

    /// Take-profit targets, nearest first (exactly 3)
    pub targets: Vec<String>,

    /// Estimated probability of the setup playing out, in percent
    pub probability: f64,
}

/// The structured market-analysis report
///
/// Immutable once constructed; a new run replaces it wholesale, reports
/// are never merged or patched. Field names match the JSON schema handed
/// to the synthesis capability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// Current market price as reported
    pub current_price: String,

    /// Overall market direction
    pub trend: Trend,

    /// Levels and indicators
    pub technical_analysis: TechnicalAnalysis,

    /// Economic factors and news impact
    pub fundamental_analysis: String,

    /// Long setup
    pub bullish_scenario: TradeScenario,

    /// Short setup
    pub bearish_scenario: TradeScenario,

    /// Key risks to the analysis
    pub risk_factors: Vec<String>,

    /// Recommended trading window for today
    pub best_trading_time: String,

    /// Bottom-line recommendation
    pub recommendation: String,
}

/// Decode a raw synthesis answer into a validated report
///
/// Strips any markdown code fences (triple backticks, optionally tagged
/// `json`) the model may have wrapped the payload in, trims whitespace,
/// parses, and shape-validates. Fence stripping is idempotent: already
/// bare JSON decodes identically.
pub fn decode(raw: &str) -> Result<AnalysisReport> {
    let cleaned = raw.replace("```json", "").replace("```", "");
    let cleaned = cleaned.trim();

    let report: AnalysisReport = serde_json::from_str(cleaned)
        .map_err(|e| AnalysisError::Decode(format!("invalid report JSON: {e}")))?;
    validate(&report)?;
    Ok(report)
}

// Shape checks serde cannot express: fixed array lengths and the
// probability range. The trend enum and numeric probabilities are already
// enforced by deserialization.
fn validate(report: &AnalysisReport) -> Result<()> {
    check_len("technicalAnalysis.resistance", &report.technical_analysis.resistance)?;
    check_len("technicalAnalysis.support", &report.technical_analysis.support)?;
    check_len("bullishScenario.targets", &report.bullish_scenario.targets)?;
    check_len("bearishScenario.targets", &report.bearish_scenario.targets)?;
    check_probability("bullishScenario.probability", report.bullish_scenario.probability)?;
    check_probability("bearishScenario.probability", report.bearish_scenario.probability)?;
    Ok(())
}

fn check_len(field: &str, values: &[String]) -> Result<()> {
    if values.len() == 3 {
        Ok(())
    } else {
        Err(AnalysisError::Decode(format!(
            "{field} must have exactly 3 entries, got {}",
            values.len()
        )))
    }
}

fn check_probability(field: &str, value: f64) -> Result<()> {
    if (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(AnalysisError::Decode(format!(
            "{field} must be within 0-100, got {value}"
        )))
    }
}
