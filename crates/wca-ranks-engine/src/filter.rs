use crate::Metric;
use wca_ranks_tables::{CompetitionRow, ResultRow};

/// Inclusive range of competition years. Either bound may be open.
///
/// A range whose min is after its max contains no year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct YearRange {
    pub min: Option<i32>,
    pub max: Option<i32>,
}

impl YearRange {
    pub fn new(min: Option<i32>, max: Option<i32>) -> Self {
        Self { min, max }
    }

    /// A range with no bounds
    pub fn all() -> Self {
        Self::default()
    }

    pub fn since(min: i32) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    pub fn contains(&self, year: i32) -> bool {
        self.min.map_or(true, |min| year >= min) && self.max.map_or(true, |max| year <= max)
    }

    /// `_<min>` and/or `_<max>` for the bounds that are set, in that order
    pub fn file_suffix(&self) -> String {
        let mut suffix = String::new();
        if let Some(min) = self.min {
            suffix.push_str(&format!("_{min}"));
        }
        if let Some(max) = self.max {
            suffix.push_str(&format!("_{max}"));
        }
        suffix
    }
}

/// Competitions held within `range`
pub fn filter_competitions(
    competitions: &[CompetitionRow],
    range: YearRange,
) -> Vec<&CompetitionRow> {
    competitions
        .iter()
        .filter(|competition| range.contains(competition.year))
        .collect()
}

/// Results with a valid (strictly positive) value for `metric`
pub fn filter_valid_results(results: &[ResultRow], metric: Metric) -> Vec<&ResultRow> {
    results
        .iter()
        .filter(|result| metric.value(result) > 0)
        .collect()
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

    fn result(average: i64, best: i64) -> ResultRow {
        ResultRow {
            competition_id: "Open2015".to_string(),
            person_id: "2015DOEJ01".to_string(),
            person_country_id: "USA".to_string(),
            event_id: "333".to_string(),
            average,
            best,
        }
    }

    #[test]
    fn test_year_range_bounds_are_inclusive() {
        let range = YearRange::new(Some(2014), Some(2016));
        assert!(!range.contains(2013));
        assert!(range.contains(2014));
        assert!(range.contains(2016));
        assert!(!range.contains(2017));

        assert!(YearRange::all().contains(1982));
        assert!(YearRange::since(2014).contains(2030));
    }

    #[test]
    fn test_inverted_range_contains_nothing() {
        let range = YearRange::new(Some(2020), Some(2014));
        assert!(!range.contains(2014));
        assert!(!range.contains(2017));
        assert!(!range.contains(2020));
        assert_eq!(range.file_suffix(), "_2020_2014");

        assert!(YearRange::new(Some(2014), Some(2014)).contains(2014));
    }

    #[test]
    fn test_file_suffix() {
        assert_eq!(YearRange::all().file_suffix(), "");
        assert_eq!(YearRange::since(2014).file_suffix(), "_2014");
        assert_eq!(YearRange::new(None, Some(2019)).file_suffix(), "_2019");
        assert_eq!(YearRange::new(Some(2014), Some(2019)).file_suffix(), "_2014_2019");
    }

    #[test]
    fn test_filter_competitions() {
        let competitions = vec![
            competition("Open2013", 2013),
            competition("Open2015", 2015),
            competition("Open2016", 2016),
        ];

        let kept = filter_competitions(&competitions, YearRange::since(2014));
        let ids: Vec<&str> = kept.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["Open2015", "Open2016"]);

        assert_eq!(filter_competitions(&competitions, YearRange::all()).len(), 3);
    }

    #[test]
    fn test_filter_valid_results_drops_non_positive_values() {
        let results = vec![result(850, 700), result(0, 650), result(-1, -1), result(-2, 900)];

        let by_average = filter_valid_results(&results, Metric::Average);
        assert_eq!(by_average.len(), 1);
        assert!(by_average.iter().all(|r| r.average > 0));

        let by_single = filter_valid_results(&results, Metric::Single);
        assert_eq!(by_single.len(), 3);
        assert!(by_single.iter().all(|r| r.best > 0));
    }
}
