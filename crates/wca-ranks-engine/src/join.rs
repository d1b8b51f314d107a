use crate::Metric;
use std::collections::{HashMap, HashSet};
use wca_ranks_tables::{CompetitionRow, CountryRow, ResultRow};

/// A result with its country's continent attached and its metric value extracted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinedResult {
    pub person_id: String,
    pub event_id: String,
    pub person_country_id: String,
    pub continent_id: String,
    pub value: i64,
}

/// Inner join of results to competitions (`competitionId = id`) and to
/// countries (`personCountryId = id`).
///
/// Results whose competition or country is absent are dropped. Result order
/// is preserved.
pub fn join_results(
    results: &[&ResultRow],
    competitions: &[&CompetitionRow],
    countries: &[CountryRow],
    metric: Metric,
) -> Vec<JoinedResult> {
    let competition_ids = competition_ids(competitions);

    let mut continents: HashMap<&str, &str> = HashMap::with_capacity(countries.len());
    for country in countries {
        continents
            .entry(country.id.as_str())
            .or_insert(country.continent_id.as_str());
    }

    results
        .iter()
        .filter(|result| competition_ids.contains(result.competition_id.as_str()))
        .filter_map(|result| {
            let continent_id = continents.get(result.person_country_id.as_str())?;
            Some(JoinedResult {
                person_id: result.person_id.clone(),
                event_id: result.event_id.clone(),
                person_country_id: result.person_country_id.clone(),
                continent_id: continent_id.to_string(),
                value: metric.value(result),
            })
        })
        .collect()
}

/// Inner join of results to competitions only
pub fn join_competitions<'a>(
    results: &[&'a ResultRow],
    competitions: &[&CompetitionRow],
) -> Vec<&'a ResultRow> {
    let competition_ids = competition_ids(competitions);

    results
        .iter()
        .copied()
        .filter(|result| competition_ids.contains(result.competition_id.as_str()))
        .collect()
}

fn competition_ids<'c>(competitions: &[&'c CompetitionRow]) -> HashSet<&'c str> {
    competitions
        .iter()
        .map(|competition| competition.id.as_str())
        .collect()
}
