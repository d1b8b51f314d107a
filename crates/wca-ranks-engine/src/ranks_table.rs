/*!
# Combined Ranks Table

Rebuilds `RanksAverage` / `RanksSingle` from the export tables:

1. Restrict competitions to the year range
2. Drop results without a valid value for the metric
3. Inner join results to competitions and countries
4. Keep each person's best row per event
5. Attach world, continent and country ranks
6. Sort by (eventId, value) and write
*/

use crate::{
    assign_ranks, best_per_person_event, filter_competitions, filter_valid_results, join_results,
    EngineResult, Metric, YearRange,
};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use wca_ranks_tables::{
    write_csv, CompetitionRow, CountryRow, RankRow, ResultRow, TableSource, RANKS_CSV_HEADERS,
};

/// A table written to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSummary {
    pub path: PathBuf,
    pub rows: usize,
}

/// `Ranks{Average|Single}[_<minYear>][_<maxYear>].csv`
pub fn ranks_file_name(metric: Metric, range: YearRange) -> String {
    format!("Ranks{}{}.csv", metric.file_label(), range.file_suffix())
}

/// Compute the ranks table from already loaded tables
pub fn compute_ranks(
    results: &[ResultRow],
    competitions: &[CompetitionRow],
    countries: &[CountryRow],
    metric: Metric,
    range: YearRange,
) -> Vec<RankRow> {
    let competitions = filter_competitions(competitions, range);
    let results = filter_valid_results(results, metric);
    debug!(
        competitions = competitions.len(),
        results = results.len(),
        %metric,
        "Filtered competitions and results"
    );

    let joined = join_results(&results, &competitions, countries, metric);
    debug!(rows = joined.len(), "Joined results to competitions and countries");

    let best = best_per_person_event(joined);
    debug!(rows = best.len(), "Selected best result per person and event");

    let mut ranks = assign_ranks(best);

    // Stable: equal (eventId, value) keeps personId order from aggregation
    ranks.sort_by(|a, b| a.event_id.cmp(&b.event_id).then(a.best.cmp(&b.best)));
    ranks
}

/// Load the export tables and compute the ranks table
pub fn build_ranks(
    source: &TableSource,
    metric: Metric,
    range: YearRange,
) -> EngineResult<Vec<RankRow>> {
    let competitions = source.competitions()?;
    let countries = source.countries()?;
    let results = source.results()?;

    Ok(compute_ranks(&results, &competitions, &countries, metric, range))
}

/// Build the ranks table and write it into `output_dir`
pub fn write_ranks(
    source: &TableSource,
    output_dir: &Path,
    metric: Metric,
    range: YearRange,
) -> EngineResult<TableSummary> {
    let ranks = build_ranks(source, metric, range)?;

    let path = output_dir.join(ranks_file_name(metric, range));
    let rows = write_csv(&path, RANKS_CSV_HEADERS, &ranks)?;
    info!(path = %path.display(), rows, %metric, "Wrote ranks table");

    Ok(TableSummary { path, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn competition(id: &str, year: i32) -> CompetitionRow {
        CompetitionRow {
            id: id.to_string(),
            year,
        }
    }

    fn country(id: &str, continent_id: &str) -> CountryRow {
        CountryRow {
            id: id.to_string(),
            continent_id: continent_id.to_string(),
        }
    }

    fn result(
        competition_id: &str,
        person_id: &str,
        country_id: &str,
        event_id: &str,
        average: i64,
        best: i64,
    ) -> ResultRow {
        ResultRow {
            competition_id: competition_id.to_string(),
            person_id: person_id.to_string(),
            person_country_id: country_id.to_string(),
            event_id: event_id.to_string(),
            average,
            best,
        }
    }

    #[test]
    fn test_ranks_file_name() {
        assert_eq!(
            ranks_file_name(Metric::Average, YearRange::all()),
            "RanksAverage.csv"
        );
        assert_eq!(
            ranks_file_name(Metric::Single, YearRange::since(2014)),
            "RanksSingle_2014.csv"
        );
        assert_eq!(
            ranks_file_name(Metric::Average, YearRange::new(Some(2014), Some(2019))),
            "RanksAverage_2014_2019.csv"
        );
    }

    #[test]
    fn test_best_average_since_year() {
        let competitions = vec![competition("Comp10", 2015), competition("Comp20", 2016)];
        let countries = vec![country("USA", "_North America")];
        let results = vec![
            result("Comp10", "1", "USA", "333", 850, 800),
            result("Comp20", "1", "USA", "333", 900, 780),
        ];

        let ranks = compute_ranks(
            &results,
            &competitions,
            &countries,
            Metric::Average,
            YearRange::since(2014),
        );
        assert_eq!(
            ranks,
            vec![RankRow {
                person_id: "1".to_string(),
                event_id: "333".to_string(),
                best: 850,
                world_rank: 1,
                continent_rank: 1,
                country_rank: 1,
            }]
        );

        let ranks = compute_ranks(
            &results,
            &competitions,
            &countries,
            Metric::Single,
            YearRange::since(2014),
        );
        assert_eq!(ranks[0].best, 780);
    }

    #[test]
    fn test_output_sorted_by_event_then_value() {
        let competitions = vec![competition("Open2015", 2015)];
        let countries = vec![country("USA", "_North America"), country("FRA", "_Europe")];
        let results = vec![
            result("Open2015", "p1", "USA", "444", 5000, 4800),
            result("Open2015", "p2", "FRA", "333", 630, 600),
            result("Open2015", "p3", "USA", "333", 620, 610),
            result("Open2015", "p4", "FRA", "333", 620, 590),
            result("Open2015", "p5", "USA", "222", 0, 300),
        ];

        let ranks = compute_ranks(
            &results,
            &competitions,
            &countries,
            Metric::Average,
            YearRange::all(),
        );

        let order: Vec<(&str, &str, i64, u32)> = ranks
            .iter()
            .map(|r| (r.event_id.as_str(), r.person_id.as_str(), r.best, r.world_rank))
            .collect();
        assert_eq!(
            order,
            vec![
                ("333", "p3", 620, 1),
                ("333", "p4", 620, 1),
                ("333", "p2", 630, 3),
                ("444", "p1", 5000, 1),
            ]
        );
    }

    #[test]
    fn test_nothing_in_range_gives_empty_table() {
        let competitions = vec![competition("Open2010", 2010)];
        let countries = vec![country("USA", "_North America")];
        let results = vec![result("Open2010", "p1", "USA", "333", 850, 800)];

        let ranks = compute_ranks(
            &results,
            &competitions,
            &countries,
            Metric::Average,
            YearRange::since(2014),
        );
        assert!(ranks.is_empty());
    }
}
