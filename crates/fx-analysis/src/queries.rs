//! Retrieval query construction
//!
//! Builds the fixed set of queries an analysis run issues: three
//! instrument-specific lookups followed by three macro-context lookups.
//! The order is significant; it fixes how findings are presented to the
//! synthesis step and must be stable across runs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Number of queries every run issues
pub const QUERY_COUNT: usize = 6;

/// A single information-retrieval query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetrievalQuery {
    /// Query text handed to the web-search capability
    pub text: String,
}

/// The outcome of one retrieval call
///
/// `text` may be empty, but the slot always exists: the synthesis prompt
/// relies on a 1:1 correspondence between queries and results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetrievalResult {
    /// The originating query
    pub query: RetrievalQuery,

    /// Extracted summary text from the capability
    pub text: String,
}

/// Build the ordered query list for one analysis run
///
/// Pure and deterministic: the same symbol and date always produce the
/// same six queries in the same order. The date renders long-form
/// ("August 26, 2026") so the price lookup pins today's data.
pub fn build(symbol: &str, date: NaiveDate) -> Vec<RetrievalQuery> {
    let human_date = date.format("%B %-d, %Y");
    [
        format!("{symbol} price today {human_date}"),
        format!("{symbol} technical analysis forecast"),
        format!("{symbol} news today"),
        "Federal Reserve interest rate decision".to_string(),
        "US dollar index DXY today".to_string(),
        "geopolitical tensions impact forex".to_string(),
    ]
    .into_iter()
    .map(|text| RetrievalQuery { text })
    .collect()
}
