use crate::config::{JobKind, RunConfig};
use crate::error::CliResult;
use std::path::Path;
use tracing::info;
use wca_ranks_engine::{write_event_ranks, write_ranks};
use wca_ranks_tables::TableSource;

/// Execute every job of a run configuration file.
///
/// Paths set in the file take precedence over the command line ones.
pub fn execute(config_path: &Path, source: &TableSource, output_dir: &Path) -> CliResult<()> {
    let config = RunConfig::load(config_path)?;

    let source = TableSource::new(
        config
            .data_dir
            .clone()
            .unwrap_or_else(|| source.data_dir.clone()),
        config
            .table_prefix
            .clone()
            .unwrap_or_else(|| source.file_prefix.clone()),
    );
    let output_dir = config
        .output_dir
        .clone()
        .unwrap_or_else(|| output_dir.to_path_buf());

    info!(
        config = %config_path.display(),
        jobs = config.jobs.len(),
        "Running configured jobs"
    );

    for job in &config.jobs {
        let range = job.year_range();
        match job.kind {
            JobKind::Ranks => {
                let summary = write_ranks(&source, &output_dir, job.metric, range)?;
                println!("✅ {} ({} rows)", summary.path.display(), summary.rows);
            }
            JobKind::EventRanks => {
                let summaries = write_event_ranks(&source, &output_dir, job.metric, range)?;
                println!(
                    "✅ {} {} event tables in {}",
                    summaries.len(),
                    job.metric,
                    output_dir.display()
                );
            }
        }
    }

    Ok(())
}
