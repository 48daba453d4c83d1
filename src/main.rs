use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use originality::{AnalysisResult, BatchSummary, ScoreBreakdown};

#[derive(Parser)]
#[command(
    name = "originality",
    about = "Score how original (human-written) a piece of prose reads",
    version
)]
struct Cli {
    /// File paths to analyze (reads stdin if none provided)
    files: Vec<PathBuf>,

    /// Print single-line JSON instead of pretty-printed
    #[arg(long, env = "ORIGINALITY_COMPACT")]
    compact: bool,

    /// Attach the per-signal score breakdown to each report
    #[arg(long, env = "ORIGINALITY_EXPLAIN")]
    explain: bool,

    /// Print an aggregate summary after the per-document reports
    #[arg(long, env = "ORIGINALITY_SUMMARY")]
    summary: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    source: &'a str,
    #[serde(flatten)]
    result: &'a AnalysisResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    breakdown: Option<ScoreBreakdown>,
}

fn print_json<T: Serialize>(value: &T, compact: bool) -> Result<()> {
    let json = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{json}");
    Ok(())
}

fn read_inputs(files: &[PathBuf]) -> Result<Vec<(String, String)>> {
    if files.is_empty() {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context("Failed to read stdin")?;
        return Ok(vec![("<stdin>".to_string(), input)]);
    }

    files
        .iter()
        .map(|path| {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Error reading {}", path.display()))?;
            Ok((path.display().to_string(), text))
        })
        .collect()
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let inputs = read_inputs(&cli.files)?;

    let mut results = Vec::with_capacity(inputs.len());
    for (source, text) in &inputs {
        let outcome = originality::analyze_outcome(text);
        if let Some(error) = outcome.error() {
            info!(source = source.as_str(), %error, "reporting neutral result");
        }
        let result = outcome.into_result();
        let breakdown = if cli.explain {
            originality::explain(text)
        } else {
            None
        };
        print_json(
            &Report {
                source: source.as_str(),
                result: &result,
                breakdown,
            },
            cli.compact,
        )?;
        results.push(result);
    }

    if cli.summary {
        print_json(&BatchSummary::from_results(&results), cli.compact)?;
    }
    Ok(())
}
