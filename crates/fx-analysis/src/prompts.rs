//! Prompt templates for the capability calls

use crate::queries::{RetrievalQuery, RetrievalResult};
use std::fmt::Write as _;

/// Literal JSON schema the synthesis answer must match
///
/// Field names and nesting mirror [`crate::report::AnalysisReport`]
/// exactly; the decoder rejects anything that strays from this shape.
pub const REPORT_SCHEMA: &str = r#"{
  "currentPrice": "string",
  "trend": "bullish/bearish/sideways",
  "technicalAnalysis": {
    "resistance": ["level1", "level2", "level3"],
    "support": ["level1", "level2", "level3"],
    "indicators": "string description"
  },
  "fundamentalAnalysis": "string",
  "bullishScenario": {
    "entry": "string",
    "stopLoss": "string",
    "targets": ["tp1", "tp2", "tp3"],
    "probability": "number"
  },
  "bearishScenario": {
    "entry": "string",
    "stopLoss": "string",
    "targets": ["tp1", "tp2", "tp3"],
    "probability": "number"
  },
  "riskFactors": ["risk1", "risk2", "risk3"],
  "bestTradingTime": "string",
  "recommendation": "string"
}"#;

/// User message for a single web-search retrieval call
pub fn retrieval_prompt(query: &RetrievalQuery) -> String {
    format!(
        "Search the web for: {}. Provide a concise summary of the most important information found.",
        query.text
    )
}

/// User message for the synthesis call
///
/// Embeds every retrieval result in query order, enumerates the six
/// required analytical sections, and demands a bare JSON answer matching
/// [`REPORT_SCHEMA`].
pub fn synthesis_prompt(symbol: &str, results: &[RetrievalResult]) -> String {
    let mut prompt = format!(
        "Based on the following search results, create a comprehensive trading analysis for {symbol}:\n\n"
    );

    for (i, result) in results.iter().enumerate() {
        let _ = writeln!(
            prompt,
            "Search {} ({}):\n{}\n",
            i + 1,
            result.query.text,
            result.text
        );
    }

    let _ = write!(
        prompt,
        "\nPlease provide:\n\
         1. Current market price and trend\n\
         2. Technical analysis (support/resistance levels, indicators)\n\
         3. Fundamental analysis (economic factors, news impact)\n\
         4. Trading scenarios (bullish/bearish setup with entry, stop loss, take profit)\n\
         5. Risk factors and probability assessment\n\
         6. Best time to trade today\n\
         \n\
         Format the response as a structured JSON with these fields:\n\
         {REPORT_SCHEMA}\n\
         \n\
         Respond ONLY with valid JSON, no markdown formatting."
    );

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results() -> Vec<RetrievalResult> {
        vec![
            RetrievalResult {
                query: RetrievalQuery {
                    text: "EURUSD price today".to_string(),
                },
                text: "Trading at 1.0920".to_string(),
            },
            RetrievalResult {
                query: RetrievalQuery {
                    text: "EURUSD news today".to_string(),
                },
                text: String::new(),
            },
        ]
    }

    #[test]
    fn test_retrieval_prompt_wraps_query() {
        let prompt = retrieval_prompt(&RetrievalQuery {
            text: "US dollar index DXY today".to_string(),
        });
        assert!(prompt.starts_with("Search the web for: US dollar index DXY today."));
        assert!(prompt.contains("concise summary"));
    }

    #[test]
    fn test_synthesis_prompt_embeds_results_in_order() {
        let prompt = synthesis_prompt("EURUSD", &results());
        let first = prompt.find("Search 1 (EURUSD price today)").expect("first result");
        let second = prompt.find("Search 2 (EURUSD news today)").expect("second result");
        assert!(first < second);
        assert!(prompt.contains("Trading at 1.0920"));
    }

    #[test]
    fn test_synthesis_prompt_demands_bare_json_schema() {
        let prompt = synthesis_prompt("EURUSD", &results());
        assert!(prompt.contains("\"bullishScenario\""));
        assert!(prompt.contains("\"bestTradingTime\""));
        assert!(prompt.ends_with("Respond ONLY with valid JSON, no markdown formatting."));
    }
}
