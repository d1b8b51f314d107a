use crate::{JoinedResult, Metric};
use std::collections::btree_map::{BTreeMap, Entry};
use wca_ranks_tables::{EventRankRow, ResultRow};

/// Keep each person's best row per event.
///
/// The whole winning row is kept, so its country and continent travel with
/// the value. On equal values the earlier row wins. Output is ordered by
/// (personId, eventId).
pub fn best_per_person_event(joined: Vec<JoinedResult>) -> Vec<JoinedResult> {
    let mut best: BTreeMap<(String, String), JoinedResult> = BTreeMap::new();

    for row in joined {
        match best.entry((row.person_id.clone(), row.event_id.clone())) {
            Entry::Vacant(entry) => {
                entry.insert(row);
            }
            Entry::Occupied(mut entry) => {
                if row.value < entry.get().value {
                    entry.insert(row);
                }
            }
        }
    }

    best.into_values().collect()
}

/// Each person's minimum `metric` value, ordered by personId
pub fn best_per_person(results: &[&ResultRow], metric: Metric) -> Vec<EventRankRow> {
    let mut best: BTreeMap<&str, i64> = BTreeMap::new();

    for result in results {
        let value = metric.value(result);
        best.entry(result.person_id.as_str())
            .and_modify(|current| *current = (*current).min(value))
            .or_insert(value);
    }

    best.into_iter()
        .map(|(person_id, best)| EventRankRow {
            person_id: person_id.to_string(),
            best,
        })
        .collect()
}
