use std::env;
use std::str::FromStr;

use anyhow::{Context, Result};

/// Aggregation key used when DOCSIM_AGGREGATION_KEY is unset.
pub const DEFAULT_AGGREGATION_KEY: &str = "all_docs";

/// Records per map split when DOCSIM_SPLIT_LINES is unset.
pub const DEFAULT_SPLIT_LINES: usize = 10_000;

/// Central configuration loaded from environment variables.
///
/// A `.env` file is loaded at startup via dotenvy, so any of these can live
/// there instead of the shell environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Key every extracted document is emitted under (DOCSIM_AGGREGATION_KEY).
    pub aggregation_key: String,
    /// Number of reduce tasks for the similarity job
    /// (DOCSIM_AGGREGATION_PARALLELISM). All-pairs comparison needs every
    /// document in one reduce call, so only 1 is accepted when the job is built.
    pub aggregation_parallelism: usize,
    /// How many map splits run at once (DOCSIM_MAP_CONCURRENCY).
    pub map_concurrency: usize,
    /// Records per map split (DOCSIM_SPLIT_LINES).
    pub split_lines: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            aggregation_key: DEFAULT_AGGREGATION_KEY.to_string(),
            aggregation_parallelism: 1,
            map_concurrency: default_map_concurrency(),
            split_lines: DEFAULT_SPLIT_LINES,
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn load() -> Result<Self> {
        let defaults = Self::default();

        let aggregation_key =
            env::var("DOCSIM_AGGREGATION_KEY").unwrap_or(defaults.aggregation_key);
        if aggregation_key.is_empty() {
            anyhow::bail!("DOCSIM_AGGREGATION_KEY is set but empty");
        }

        Ok(Self {
            aggregation_key,
            aggregation_parallelism: parse_var(
                "DOCSIM_AGGREGATION_PARALLELISM",
                defaults.aggregation_parallelism,
            )?,
            map_concurrency: parse_var("DOCSIM_MAP_CONCURRENCY", defaults.map_concurrency)?,
            split_lines: parse_var("DOCSIM_SPLIT_LINES", defaults.split_lines)?,
        })
    }
}

/// One map split per available core, or 1 if that can't be determined.
fn default_map_concurrency() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{name} must be a number, got {raw:?}")),
        Err(_) => Ok(default),
    }
}
