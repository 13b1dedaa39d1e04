// Batch execution — map/reduce traits, job settings, counters, and the local runner.

pub mod counters;
pub mod job;
pub mod runner;
pub mod traits;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use crate::config::Config;
use crate::similarity::{SimilarityAggregator, WordSetExtractor};
use counters::JobReport;
use job::JobSpec;

/// Run the document similarity job: extract word sets from `input`, compare
/// every pair in one reduce task, and write the results under `output`.
pub async fn run_document_similarity(
    config: &Config,
    input: &Path,
    output: &Path,
    show_progress: bool,
) -> Result<JobReport> {
    let mut job = JobSpec::document_similarity(config)?;
    job.show_progress = show_progress;

    let mapper = Arc::new(WordSetExtractor::new(config.aggregation_key.as_str()));
    let reducer = Arc::new(SimilarityAggregator);

    info!(
        aggregation_key = mapper.aggregation_key(),
        reduce_tasks = job.reduce_tasks,
        "Routing every document to a single reduce task"
    );

    runner::run(&job, mapper, reducer, input, output).await
}
