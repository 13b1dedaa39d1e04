// docsim-gen: write a synthetic themed corpus for benchmarking the similarity job.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use rand::rngs::StdRng;
use rand::SeedableRng;

use docsim::corpus::generate::{generate, CorpusSpec, CorpusStats, Preset};

/// Generate a synthetic corpus of `Document<i> <text>` records.
#[derive(Parser)]
#[command(name = "docsim-gen", version, about)]
struct Cli {
    /// File to write the corpus to
    output: PathBuf,

    /// Use a built-in size instead of --documents/--words
    #[arg(long, value_enum, conflicts_with_all = ["documents", "words"])]
    preset: Option<Preset>,

    /// Number of documents (default: 100)
    #[arg(long, default_value = "100")]
    documents: usize,

    /// Approximate total word count across all documents (default: 5000)
    #[arg(long, default_value = "5000")]
    words: usize,

    /// RNG seed; the same seed always produces the same corpus
    #[arg(long, default_value = "42")]
    seed: u64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("docsim=info")),
        )
        .init();

    let cli = Cli::parse();

    let spec = match cli.preset {
        Some(preset) => CorpusSpec::preset(preset),
        None => CorpusSpec {
            documents: cli.documents,
            total_words: cli.words,
        },
    };

    println!(
        "Generating {} documents, ~{} words (seed {})...",
        spec.documents, spec.total_words, cli.seed
    );

    let mut rng = StdRng::seed_from_u64(cli.seed);
    let lines = generate(&mut rng, spec);

    let mut body = lines.join("\n");
    if !body.is_empty() {
        body.push('\n');
    }
    std::fs::write(&cli.output, body)
        .with_context(|| format!("Failed to write corpus to {}", cli.output.display()))?;

    let stats = CorpusStats::from_lines(&lines);
    println!(
        "{}",
        format!(
            "{}: {} documents, {} words",
            cli.output.display(),
            stats.documents,
            stats.words
        )
        .bold()
    );

    Ok(())
}
