// Local job runner: read -> split -> map (parallel) -> shuffle -> reduce -> write.
//
// Strategy: input lines are cut into fixed-size splits that never cross a
// file boundary. Splits are mapped on tokio's blocking pool, a bounded number
// at a time, and collected back in split order, so values reach the reducer
// in input order. Emissions are grouped by key and hashed across reduce
// partitions; each partition is reduced on its own blocking worker and
// written to its own part file. `_SUCCESS` is written last.

use std::collections::hash_map::DefaultHasher;
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::hash::{Hash, Hasher};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::Utc;
use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, warn};

use super::counters::{JobCounters, JobReport};
use super::job::JobSpec;
use super::traits::{KeyedRecord, Mapper, Reducer};

/// Marker file written once every part file is complete.
pub const SUCCESS_MARKER: &str = "_SUCCESS";

/// Name of the part file for reduce partition `index`.
pub fn part_file_name(index: usize) -> String {
    format!("part-r-{index:05}")
}

/// Reduce partition for `key` among `partitions`.
pub fn partition_for(key: &str, partitions: usize) -> usize {
    let mut hasher = DefaultHasher::new();
    key.hash(&mut hasher);
    (hasher.finish() % partitions as u64) as usize
}

/// A contiguous run of lines from one input file.
struct Split {
    source: PathBuf,
    /// 1-based line number of the first line in `lines`.
    first_line: usize,
    lines: Vec<String>,
}

#[derive(Default)]
struct MapOutput {
    emitted: Vec<KeyedRecord>,
    records: usize,
    dropped: usize,
}

#[derive(Default)]
struct ReduceOutput {
    lines: Vec<String>,
    groups: usize,
    records: usize,
}

/// Run a job end to end.
///
/// `input` is a file or a directory of files; `output` is a directory that
/// must not exist yet. Returns the run report once `_SUCCESS` is written.
pub async fn run(
    job: &JobSpec,
    mapper: Arc<dyn Mapper>,
    reducer: Arc<dyn Reducer>,
    input: &Path,
    output: &Path,
) -> Result<JobReport> {
    job.validate()?;
    if output.exists() {
        anyhow::bail!("Output directory {} already exists", output.display());
    }

    let started_at = Utc::now();
    let clock = Instant::now();
    let mut counters = JobCounters::default();

    // Step 1: Read and split the input
    let files = list_input_files(input)?;
    let splits = read_splits(&files, job.split_lines)?;
    info!(
        job = %job.name,
        files = files.len(),
        splits = splits.len(),
        "Input split"
    );

    // Step 2: Map splits in parallel, preserving split order
    let map_outputs = map_phase(job, mapper, splits).await?;

    // Step 3: Shuffle emissions into reduce partitions
    let mut partitions: Vec<BTreeMap<String, Vec<String>>> = vec![BTreeMap::new(); job.reduce_tasks];
    for out in map_outputs {
        counters.input_records += out.records;
        counters.dropped_records += out.dropped;
        counters.map_output_records += out.emitted.len();
        for record in out.emitted {
            let partition = partition_for(&record.key, job.reduce_tasks);
            partitions[partition]
                .entry(record.key)
                .or_default()
                .push(record.value);
        }
    }

    info!(
        records = counters.input_records,
        emitted = counters.map_output_records,
        dropped = counters.dropped_records,
        "Map phase complete"
    );
    if counters.dropped_records > 0 {
        warn!(
            dropped = counters.dropped_records,
            "Skipped blank or malformed input records"
        );
    }

    // Step 4: Reduce each partition on its own worker
    let reduce_outputs = reduce_phase(job, reducer, partitions).await?;

    // Step 5: Write part files, then the success marker
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory {}", output.display()))?;

    let mut output_files = Vec::with_capacity(reduce_outputs.len());
    for (index, out) in reduce_outputs.into_iter().enumerate() {
        counters.reduce_input_groups += out.groups;
        counters.reduce_input_records += out.records;
        counters.output_records += out.lines.len();

        let path = output.join(part_file_name(index));
        write_lines(&path, &out.lines)?;
        output_files.push(path);
    }

    let marker = output.join(SUCCESS_MARKER);
    File::create(&marker).with_context(|| format!("Failed to write {}", marker.display()))?;

    info!(
        groups = counters.reduce_input_groups,
        output = counters.output_records,
        "Reduce phase complete"
    );

    Ok(JobReport {
        job_name: job.name.clone(),
        started_at,
        finished_at: Utc::now(),
        elapsed_ms: clock.elapsed().as_millis() as u64,
        counters,
        output_files,
    })
}

/// Resolve `input` to the list of files to read.
///
/// A directory contributes its regular files, skipping names that start with
/// `_` or `.` (markers and hidden files), sorted by name.
fn list_input_files(input: &Path) -> Result<Vec<PathBuf>> {
    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }
    if !input.is_dir() {
        anyhow::bail!("Input path does not exist: {}", input.display());
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(input)
        .with_context(|| format!("Failed to list input directory {}", input.display()))?
    {
        let path = entry?.path();
        let hidden = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with('_') || n.starts_with('.'));
        if path.is_file() && !hidden {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn read_splits(files: &[PathBuf], split_lines: usize) -> Result<Vec<Split>> {
    let mut splits = Vec::new();
    for path in files {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display()))?;
        let lines: Vec<&str> = text.lines().collect();
        for (chunk_index, chunk) in lines.chunks(split_lines).enumerate() {
            splits.push(Split {
                source: path.clone(),
                first_line: chunk_index * split_lines + 1,
                lines: chunk.iter().map(|l| l.to_string()).collect(),
            });
        }
    }
    Ok(splits)
}

fn map_split(mapper: &dyn Mapper, split: Split) -> MapOutput {
    let mut out = MapOutput {
        records: split.lines.len(),
        ..MapOutput::default()
    };
    for (offset, line) in split.lines.iter().enumerate() {
        match mapper.map(line) {
            Some(record) => out.emitted.push(record),
            None => {
                out.dropped += 1;
                debug!(
                    file = %split.source.display(),
                    line = split.first_line + offset,
                    "Dropped blank or malformed record"
                );
            }
        }
    }
    out
}

async fn map_phase(
    job: &JobSpec,
    mapper: Arc<dyn Mapper>,
    splits: Vec<Split>,
) -> Result<Vec<MapOutput>> {
    let pb = if job.show_progress {
        let pb = ProgressBar::new(splits.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("  Map [{bar:30}] {pos}/{len} splits ({eta})")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let results: Vec<Result<MapOutput>> = stream::iter(splits.into_iter().map(|split| {
        let mapper = Arc::clone(&mapper);
        let pb = pb.clone();
        async move {
            let out = tokio::task::spawn_blocking(move || map_split(mapper.as_ref(), split))
                .await
                .context("Map task failed")?;
            pb.inc(1);
            Ok::<_, anyhow::Error>(out)
        }
    }))
    .buffered(job.map_concurrency)
    .collect()
    .await;
    pb.finish_and_clear();

    results.into_iter().collect()
}

async fn reduce_phase(
    job: &JobSpec,
    reducer: Arc<dyn Reducer>,
    partitions: Vec<BTreeMap<String, Vec<String>>>,
) -> Result<Vec<ReduceOutput>> {
    let results: Vec<Result<ReduceOutput>> =
        stream::iter(partitions.into_iter().map(|groups| {
            let reducer = Arc::clone(&reducer);
            async move {
                tokio::task::spawn_blocking(move || {
                    let mut out = ReduceOutput::default();
                    for (key, values) in groups {
                        out.groups += 1;
                        out.records += values.len();
                        out.lines.extend(reducer.reduce(&key, values));
                    }
                    out
                })
                .await
                .context("Reduce task failed")
            }
        }))
        .buffered(job.reduce_tasks)
        .collect()
        .await;

    results.into_iter().collect()
}

fn write_lines(path: &Path, lines: &[String]) -> Result<()> {
    let file = File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    for line in lines {
        writeln!(writer, "{line}")?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
