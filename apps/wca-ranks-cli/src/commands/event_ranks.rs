use crate::error::CliResult;
use std::path::Path;
use tracing::info;
use wca_ranks_engine::{write_event_ranks, Metric, YearRange};
use wca_ranks_tables::TableSource;

/// Write one ranks table per event listed in the Events table
pub fn execute(
    source: &TableSource,
    output_dir: &Path,
    metric: Metric,
    min_year: Option<i32>,
    max_year: Option<i32>,
) -> CliResult<()> {
    let range = YearRange::new(min_year, max_year);
    info!(
        data_dir = %source.data_dir.display(),
        %metric,
        ?range,
        "Building per-event ranks tables"
    );

    let summaries = write_event_ranks(source, output_dir, metric, range)?;
    let rows: usize = summaries.iter().map(|s| s.rows).sum();
    println!(
        "✅ {} event tables in {} ({} rows)",
        summaries.len(),
        output_dir.display(),
        rows
    );

    Ok(())
}
