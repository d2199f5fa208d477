//! Static instrument reference data
//!
//! The selectable catalog: currency pairs, metals, and crypto assets. The
//! table is fixed at compile time; the pipeline only ever reads it.

use serde::Serialize;

/// A tradable instrument selectable for analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Instrument {
    /// Ticker symbol (e.g., "EURUSD"); uniquely identifies the instrument
    pub symbol: &'static str,

    /// Human-readable label (e.g., "EUR/USD")
    pub display_name: &'static str,

    /// Catalog grouping (e.g., "Major Pairs")
    pub category: &'static str,
}

/// The full instrument catalog, in catalog order
pub const CATALOG: &[Instrument] = &[
    Instrument { symbol: "XAUUSD", display_name: "XAU/USD (Gold)", category: "Commodities" },
    Instrument { symbol: "XAGUSD", display_name: "XAG/USD (Silver)", category: "Commodities" },
    Instrument { symbol: "EURUSD", display_name: "EUR/USD", category: "Major Pairs" },
    Instrument { symbol: "GBPUSD", display_name: "GBP/USD", category: "Major Pairs" },
    Instrument { symbol: "USDJPY", display_name: "USD/JPY", category: "Major Pairs" },
    Instrument { symbol: "AUDUSD", display_name: "AUD/USD", category: "Major Pairs" },
    Instrument { symbol: "USDCAD", display_name: "USD/CAD", category: "Major Pairs" },
    Instrument { symbol: "NZDUSD", display_name: "NZD/USD", category: "Major Pairs" },
    Instrument { symbol: "USDCHF", display_name: "USD/CHF", category: "Major Pairs" },
    Instrument { symbol: "EURJPY", display_name: "EUR/JPY", category: "Cross Pairs" },
    Instrument { symbol: "GBPJPY", display_name: "GBP/JPY", category: "Cross Pairs" },
    Instrument { symbol: "EURGBP", display_name: "EUR/GBP", category: "Cross Pairs" },
    Instrument { symbol: "BTCUSD", display_name: "BTC/USD (Bitcoin)", category: "Crypto" },
    Instrument { symbol: "ETHUSD", display_name: "ETH/USD (Ethereum)", category: "Crypto" },
];

/// Look up an instrument by its symbol
pub fn find(symbol: &str) -> Option<&'static Instrument> {
    CATALOG.iter().find(|i| i.symbol == symbol)
}

/// The catalog grouped by category, categories in first-seen order
pub fn grouped() -> Vec<(&'static str, Vec<&'static Instrument>)> {
    let mut groups: Vec<(&'static str, Vec<&'static Instrument>)> = Vec::new();
    for instrument in CATALOG {
        match groups.iter_mut().find(|(cat, _)| *cat == instrument.category) {
            Some((_, members)) => members.push(instrument),
            None => groups.push((instrument.category, vec![instrument])),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_size_and_unique_symbols() {
        assert_eq!(CATALOG.len(), 14);
        for (i, a) in CATALOG.iter().enumerate() {
            for b in &CATALOG[i + 1..] {
                assert_ne!(a.symbol, b.symbol);
            }
        }
    }

    #[test]
    fn test_find() {
        let eurusd = find("EURUSD").expect("EURUSD in catalog");
        assert_eq!(eurusd.display_name, "EUR/USD");
        assert_eq!(eurusd.category, "Major Pairs");
        assert!(find("DOGEUSD").is_none());
    }

    #[test]
    fn test_grouped_preserves_order() {
        let groups = grouped();
        let categories: Vec<_> = groups.iter().map(|(cat, _)| *cat).collect();
        assert_eq!(
            categories,
            ["Commodities", "Major Pairs", "Cross Pairs", "Crypto"]
        );
        let majors = &groups[1].1;
        assert_eq!(majors.len(), 7);
        assert_eq!(majors[0].symbol, "EURUSD");
    }
}
