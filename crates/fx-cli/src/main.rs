//! Command-line interface for fx-analyzer

mod logging;
mod render;

use clap::Parser;
use fx_analysis::{AnalysisOrchestrator, AnalyzerConfig, instrument};
use fx_llm::AnthropicProvider;
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "fx-analyzer")]
#[command(about = "Automated market analysis from live web data", long_about = None)]
struct Args {
    /// Instrument symbol to analyze (e.g. EURUSD)
    symbol: Option<String>,

    /// List the selectable instruments and exit
    #[arg(short, long)]
    list: bool,

    /// Override the model identifier
    #[arg(short, long)]
    model: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_tracing();

    let args = Args::parse();

    if args.list {
        print!("{}", render::render_catalog());
        return Ok(());
    }

    let Some(symbol) = args.symbol else {
        println!("No instrument selected. Use --list to see the catalog.");
        return Ok(());
    };

    // Resolve here for rendering; the orchestrator re-validates the
    // selection before running.
    let Some(selected) = instrument::find(&symbol) else {
        println!("Unknown instrument '{symbol}'. Use --list to see the catalog.");
        std::process::exit(2);
    };

    let mut config = AnalyzerConfig::builder();
    if let Some(model) = args.model {
        config = config.model(model);
    }

    let provider = Arc::new(AnthropicProvider::from_env()?);
    let orchestrator = AnalysisOrchestrator::new(provider, config.build());

    info!(symbol, "starting analysis");
    match orchestrator.analyze(&symbol).await {
        Ok(report) => {
            print!("{}", render::render_report(selected, &report));
            Ok(())
        }
        Err(err) => {
            tracing::error!(error = %err, "analysis failed");
            println!("Something went wrong during the analysis. Please try again.");
            std::process::exit(1);
        }
    }
}
