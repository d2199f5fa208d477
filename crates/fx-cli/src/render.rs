//! Plain-text report rendering

use fx_analysis::{AnalysisReport, Instrument, TradeScenario, Trend, instrument};
use std::fmt::Write as _;

const DISCLAIMER: &str = "Disclaimer: this analysis is assembled from current internet data and \
news. It is not investment advice. Forex trading carries high risk; use sound risk management \
and trade your own strategy.";

/// Render the full report for terminal output
pub fn render_report(selected: &Instrument, report: &AnalysisReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "=== Market Analysis: {} ===\n", selected.display_name);
    let _ = writeln!(out, "Current price: {}", report.current_price);
    let _ = writeln!(out, "Trend:         {}\n", trend_label(report.trend));

    let _ = writeln!(out, "--- Technical Analysis ---");
    for (i, level) in report.technical_analysis.resistance.iter().enumerate() {
        let _ = writeln!(out, "  R{}: {level}", i + 1);
    }
    for (i, level) in report.technical_analysis.support.iter().enumerate() {
        let _ = writeln!(out, "  S{}: {level}", i + 1);
    }
    let _ = writeln!(out, "  Indicators: {}\n", report.technical_analysis.indicators);

    let _ = writeln!(out, "--- Fundamental Analysis ---");
    let _ = writeln!(out, "{}\n", report.fundamental_analysis);

    render_scenario(&mut out, "Bullish Scenario", &report.bullish_scenario);
    render_scenario(&mut out, "Bearish Scenario", &report.bearish_scenario);

    let _ = writeln!(out, "--- Risk Factors ---");
    for risk in &report.risk_factors {
        let _ = writeln!(out, "  ! {risk}");
    }

    let _ = writeln!(out, "\nBest trading time: {}", report.best_trading_time);
    let _ = writeln!(out, "Recommendation:    {}\n", report.recommendation);
    let _ = writeln!(out, "{DISCLAIMER}");

    out
}

/// Render the selectable instrument catalog, grouped by category
pub fn render_catalog() -> String {
    let mut out = String::new();
    for (category, members) in instrument::grouped() {
        let _ = writeln!(out, "{category}:");
        for member in members {
            let _ = writeln!(out, "  {:8} {}", member.symbol, member.display_name);
        }
    }
    out
}

fn render_scenario(out: &mut String, title: &str, scenario: &TradeScenario) {
    let _ = writeln!(out, "--- {title} ---");
    let _ = writeln!(out, "  Entry:     {}", scenario.entry);
    let _ = writeln!(out, "  Stop loss: {}", scenario.stop_loss);
    for (i, target) in scenario.targets.iter().enumerate() {
        let _ = writeln!(out, "  TP{}:       {}", i + 1, target);
    }
    let _ = writeln!(out, "  Probability: {}%\n", scenario.probability);
}

fn trend_label(trend: Trend) -> &'static str {
    match trend {
        Trend::Bullish => "BULLISH",
        Trend::Bearish => "BEARISH",
        Trend::Sideways => "SIDEWAYS",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fx_analysis::TechnicalAnalysis;

    fn report() -> AnalysisReport {
        AnalysisReport {
            current_price: "1.0920".to_string(),
            trend: Trend::Bullish,
            technical_analysis: TechnicalAnalysis {
                resistance: vec!["1.0950".into(), "1.0980".into(), "1.1010".into()],
                support: vec!["1.0890".into(), "1.0860".into(), "1.0830".into()],
                indicators: "RSI 58".to_string(),
            },
            fundamental_analysis: "Fed on hold.".to_string(),
            bullish_scenario: TradeScenario {
                entry: "1.0925".to_string(),
                stop_loss: "1.0885".to_string(),
                targets: vec!["1.0950".into(), "1.0980".into(), "1.1010".into()],
                probability: 60.0,
            },
            bearish_scenario: TradeScenario {
                entry: "1.0885".to_string(),
                stop_loss: "1.0925".to_string(),
                targets: vec!["1.0860".into(), "1.0830".into(), "1.0800".into()],
                probability: 40.0,
            },
            risk_factors: vec!["CPI release".to_string()],
            best_trading_time: "London open".to_string(),
            recommendation: "Buy dips".to_string(),
        }
    }

    #[test]
    fn test_render_report_sections() {
        let eurusd = instrument::find("EURUSD").expect("catalog entry");
        let text = render_report(eurusd, &report());
        assert!(text.contains("Market Analysis: EUR/USD"));
        assert!(text.contains("Trend:         BULLISH"));
        assert!(text.contains("R1: 1.0950"));
        assert!(text.contains("S3: 1.0830"));
        assert!(text.contains("TP2:       1.0980"));
        assert!(text.contains("Probability: 60%"));
        assert!(text.contains("Disclaimer"));
    }

    #[test]
    fn test_render_catalog_groups() {
        let text = render_catalog();
        assert!(text.contains("Commodities:"));
        assert!(text.contains("EURUSD"));
        let majors = text.find("Major Pairs:").expect("majors group");
        let crypto = text.find("Crypto:").expect("crypto group");
        assert!(majors < crypto);
    }
}
