use crate::error::{CliError, CliResult};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::{Path, PathBuf};
use wca_ranks_engine::{Metric, YearRange};

/// Run configuration file structure
///
/// ```yaml
/// data_dir: data
/// output_dir: output
/// jobs:
///   - kind: ranks
///     metric: average
///     min_year: 2014
///   - kind: event_ranks
///     min_year: 2014
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Directory holding the export TSV files (overrides `--data-dir`)
    pub data_dir: Option<PathBuf>,

    /// File name prefix of the export tables (overrides `--table-prefix`)
    pub table_prefix: Option<String>,

    /// Directory for generated tables (overrides `--output-dir`)
    pub output_dir: Option<PathBuf>,

    /// Tables to build, in order
    pub jobs: Vec<JobConfig>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobKind {
    /// Combined world/continent/country ranks table
    Ranks,
    /// One table per event
    EventRanks,
}

/// A single table build
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobConfig {
    pub kind: JobKind,

    #[serde(default = "default_metric")]
    pub metric: Metric,

    pub min_year: Option<i32>,

    pub max_year: Option<i32>,
}

impl JobConfig {
    pub fn year_range(&self) -> YearRange {
        YearRange::new(self.min_year, self.max_year)
    }
}

impl RunConfig {
    pub fn load(path: &Path) -> CliResult<Self> {
        let file = File::open(path)?;
        let config: Self = serde_yaml::from_reader(file)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> CliResult<()> {
        if self.jobs.is_empty() {
            return Err(CliError::InvalidConfig("Run configuration has no jobs".to_string()));
        }

        Ok(())
    }
}

fn default_metric() -> Metric {
    Metric::Average
}
