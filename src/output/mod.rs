// Output formatting — terminal summaries and the JSON job report.

pub mod terminal;

use std::path::Path;

use anyhow::{Context, Result};

use crate::pipeline::counters::JobReport;

/// Render a duration in milliseconds as `850 ms`, `12.4 s` or `3m 05s`.
pub fn format_elapsed(ms: u64) -> String {
    if ms < 1_000 {
        format!("{ms} ms")
    } else if ms < 60_000 {
        format!("{:.1} s", ms as f64 / 1000.0)
    } else {
        let secs = ms / 1000;
        format!("{}m {:02}s", secs / 60, secs % 60)
    }
}

/// Write the job report as pretty-printed JSON.
pub fn write_report(report: &JobReport, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write job report to {}", path.display()))?;
    Ok(())
}
