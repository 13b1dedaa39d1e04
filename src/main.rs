use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing::info;

use docsim::config::Config;

/// docsim: pairwise Jaccard similarity for every pair of documents in a corpus.
///
/// Reads `<docId> <content>` records, one per line, and writes one
/// `doc1, doc2 Similarity: 0.56` line per document pair.
#[derive(Parser)]
#[command(name = "docsim", version, about)]
struct Cli {
    /// Input file, or a directory of input files
    input: PathBuf,

    /// Output directory (must not exist yet)
    output: PathBuf,

    /// Number of map splits to process in parallel (overrides DOCSIM_MAP_CONCURRENCY)
    #[arg(long)]
    map_concurrency: Option<usize>,

    /// Records per map split (overrides DOCSIM_SPLIT_LINES)
    #[arg(long)]
    split_lines: Option<usize>,

    /// Also write the job report as JSON to this path
    #[arg(long)]
    report: Option<PathBuf>,

    /// No progress bar or summary
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("docsim=info")),
        )
        .init();

    // Usage errors exit with code 2 from here
    let cli = Cli::parse();

    let mut config = Config::load()?;
    if let Some(n) = cli.map_concurrency {
        config.map_concurrency = n;
    }
    if let Some(n) = cli.split_lines {
        config.split_lines = n;
    }

    info!(
        input = %cli.input.display(),
        output = %cli.output.display(),
        map_concurrency = config.map_concurrency,
        "Starting document similarity job"
    );

    let report = docsim::pipeline::run_document_similarity(
        &config,
        &cli.input,
        &cli.output,
        !cli.quiet,
    )
    .await?;

    if let Some(ref path) = cli.report {
        docsim::output::write_report(&report, path)?;
    }

    if !cli.quiet {
        docsim::output::terminal::display_job_summary(&report);
        if let Some(ref path) = cli.report {
            println!(
                "  {}",
                format!("Report saved to: {}", path.display()).dimmed()
            );
        }
    }

    Ok(())
}
