// Job counters and the end-of-run report.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Record counts gathered across all phases of a run.
///
/// `input_records == map_output_records + dropped_records` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct JobCounters {
    /// Lines read from the input.
    pub input_records: usize,
    /// Records the mapper emitted.
    pub map_output_records: usize,
    /// Lines the mapper declined (blank or malformed).
    pub dropped_records: usize,
    /// Distinct keys seen by reducers.
    pub reduce_input_groups: usize,
    /// Values delivered to reducers.
    pub reduce_input_records: usize,
    /// Lines written to the output.
    pub output_records: usize,
}

/// Summary of one completed run. Serializes to the `--report` JSON file.
#[derive(Debug, Clone, Serialize)]
pub struct JobReport {
    pub job_name: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub elapsed_ms: u64,
    pub counters: JobCounters,
    /// Part files written, in partition order.
    pub output_files: Vec<PathBuf>,
}
