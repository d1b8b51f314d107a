use crate::error::CliResult;
use std::path::Path;
use tracing::info;
use wca_ranks_engine::{write_ranks, Metric, YearRange};
use wca_ranks_tables::TableSource;

/// Write one combined ranks table per metric
pub fn execute(
    source: &TableSource,
    output_dir: &Path,
    metrics: &[Metric],
    min_year: Option<i32>,
    max_year: Option<i32>,
) -> CliResult<()> {
    let range = YearRange::new(min_year, max_year);
    info!(
        data_dir = %source.data_dir.display(),
        ?metrics,
        ?range,
        "Building ranks tables"
    );

    for &metric in metrics {
        let summary = write_ranks(source, output_dir, metric, range)?;
        println!("✅ {} ({} rows)", summary.path.display(), summary.rows);
    }

    Ok(())
}
