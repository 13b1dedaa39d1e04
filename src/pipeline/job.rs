// Job settings — how many workers run each phase, and how input is split.
//
// The number of reduce tasks is always passed explicitly; there is no
// default. For the similarity job it is pinned to one, because scoring every
// pair needs every document inside the same reduce call. That single reduce
// task is the throughput ceiling of the job: it does O(n²) comparisons alone.

use anyhow::Result;

use crate::config::{Config, DEFAULT_SPLIT_LINES};

/// Job name shown in logs and reports.
pub const SIMILARITY_JOB_NAME: &str = "document similarity";

/// Reduce tasks for all-pairs comparison. Anything else splits the corpus
/// and silently loses every cross-partition pair.
pub const ALL_PAIRS_REDUCE_TASKS: usize = 1;

/// Execution settings for one run of the runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobSpec {
    pub name: String,
    /// Number of reduce partitions; keys are hashed across them.
    pub reduce_tasks: usize,
    /// Maximum number of map splits in flight at once.
    pub map_concurrency: usize,
    /// Records per map split.
    pub split_lines: usize,
    /// Draw a progress bar for the map phase.
    pub show_progress: bool,
}

impl JobSpec {
    /// A job with the given reduce parallelism, one map worker, default split
    /// size and no progress bar.
    pub fn new(name: impl Into<String>, reduce_tasks: usize) -> Self {
        Self {
            name: name.into(),
            reduce_tasks,
            map_concurrency: 1,
            split_lines: DEFAULT_SPLIT_LINES,
            show_progress: false,
        }
    }

    /// The all-pairs similarity job as configured.
    ///
    /// Fails if the configured aggregation parallelism is not exactly one.
    pub fn document_similarity(config: &Config) -> Result<Self> {
        if config.aggregation_parallelism != ALL_PAIRS_REDUCE_TASKS {
            anyhow::bail!(
                "Aggregation parallelism must be {ALL_PAIRS_REDUCE_TASKS} for all-pairs similarity \
                 (got {}). Every document has to reach the same reduce task, or pairs that span \
                 partitions are never compared.",
                config.aggregation_parallelism
            );
        }

        let job = Self {
            name: SIMILARITY_JOB_NAME.to_string(),
            reduce_tasks: config.aggregation_parallelism,
            map_concurrency: config.map_concurrency,
            split_lines: config.split_lines,
            show_progress: false,
        };
        job.validate()?;
        Ok(job)
    }

    /// Check that every worker count is usable.
    pub fn validate(&self) -> Result<()> {
        if self.reduce_tasks == 0 {
            anyhow::bail!("Job '{}' needs at least one reduce task", self.name);
        }
        if self.map_concurrency == 0 {
            anyhow::bail!("Job '{}' needs a map concurrency of at least 1", self.name);
        }
        if self.split_lines == 0 {
            anyhow::bail!("Job '{}' needs a split size of at least 1 line", self.name);
        }
        Ok(())
    }
}
