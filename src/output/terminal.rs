// Colored terminal output for job summaries.

use colored::Colorize;

use crate::pipeline::counters::JobReport;

/// Display the end-of-run summary for a completed job.
pub fn display_job_summary(report: &JobReport) {
    let c = &report.counters;

    println!(
        "\n{}",
        format!("=== Job complete: {} ===", report.job_name).bold()
    );
    println!();
    println!("  {:<24} {:>10}", "Input records".dimmed(), c.input_records);
    println!("  {:<24} {:>10}", "Documents extracted".dimmed(), c.map_output_records);
    println!("  {:<24} {:>10}", "Reduce groups".dimmed(), c.reduce_input_groups);
    println!("  {:<24} {:>10}", "Output lines".dimmed(), c.output_records);

    if c.dropped_records > 0 {
        println!(
            "  {} {} blank or malformed line(s) skipped",
            "!".yellow(),
            c.dropped_records
        );
    }

    println!();
    for path in &report.output_files {
        println!("  {} {}", "->".green(), path.display());
    }
    println!(
        "  {}",
        format!("Finished in {}", super::format_elapsed(report.elapsed_ms)).dimmed()
    );
}
