/*!
# Per-Event Ranks Tables

One table per event listed in `Events`: each person's best value for that
event within the year range, sorted ascending. Countries are not consulted,
so a result whose country is unknown still counts here.
*/

use crate::{
    best_per_person, filter_competitions, filter_valid_results, join_competitions, EngineResult,
    Metric, TableSummary, YearRange,
};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info, warn};
use wca_ranks_tables::{
    write_csv, CompetitionRow, EventRankRow, EventRow, ResultRow, TableSource,
    EVENT_RANKS_CSV_HEADERS,
};

/// `Ranks{Average|Single}_<eventId>.csv`
pub fn event_ranks_file_name(metric: Metric, event_id: &str) -> String {
    format!("Ranks{}_{}.csv", metric.file_label(), event_id)
}

/// Compute one ranks table per event, in `events` order.
///
/// Events without qualifying results get an empty table.
pub fn compute_event_ranks(
    results: &[ResultRow],
    competitions: &[CompetitionRow],
    events: &[EventRow],
    metric: Metric,
    range: YearRange,
) -> Vec<(String, Vec<EventRankRow>)> {
    let competitions = filter_competitions(competitions, range);
    let results = filter_valid_results(results, metric);
    let results = join_competitions(&results, &competitions);
    debug!(rows = results.len(), %metric, "Joined valid results to competitions");

    let mut by_event: HashMap<&str, Vec<&ResultRow>> = HashMap::new();
    for result in results {
        by_event
            .entry(result.event_id.as_str())
            .or_default()
            .push(result);
    }

    events
        .iter()
        .map(|event| {
            let mut rows = by_event
                .get(event.id.as_str())
                .map(|results| best_per_person(results, metric))
                .unwrap_or_default();

            // Stable: ties keep personId order
            rows.sort_by_key(|row| row.best);
            (event.id.clone(), rows)
        })
        .collect()
}

/// Load the export tables and write one ranks table per event into `output_dir`
pub fn write_event_ranks(
    source: &TableSource,
    output_dir: &Path,
    metric: Metric,
    range: YearRange,
) -> EngineResult<Vec<TableSummary>> {
    let competitions = source.competitions()?;
    let results = source.results()?;
    let events = source.events()?;

    let tables = compute_event_ranks(&results, &competitions, &events, metric, range);

    let mut summaries = Vec::with_capacity(tables.len());
    for (event_id, rows) in tables {
        if rows.is_empty() {
            warn!(event_id = %event_id, %metric, "No qualifying results for event");
        }

        let path = output_dir.join(event_ranks_file_name(metric, &event_id));
        let rows = write_csv(&path, EVENT_RANKS_CSV_HEADERS, &rows)?;
        debug!(path = %path.display(), rows, "Wrote event ranks table");

        summaries.push(TableSummary { path, rows });
    }

    info!(
        tables = summaries.len(),
        %metric,
        output_dir = %output_dir.display(),
        "Wrote event ranks tables"
    );
    Ok(summaries)
}
