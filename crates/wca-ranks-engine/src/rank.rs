/*!
# Ranking

Ranks are computed independently per grouping scope. Ties use the average
method: entries tied over 1-based positions `p..=q` share the mean `(p + q) / 2`,
which is then truncated to an integer. Two entries tied for first both get
rank 1 and the next entry gets rank 3; three entries tied for first all get
rank 2.

Integer division gives the same result as truncating the exact mean, since
positions are positive.
*/

use crate::JoinedResult;
use std::collections::HashMap;
use std::hash::Hash;
use wca_ranks_tables::RankRow;

/// Grouping key over which a rank column is computed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankScope {
    /// Per event
    World,
    /// Per event and continent
    Continent,
    /// Per event and country
    Country,
}

impl RankScope {
    /// Rank of every row within its scope group, in row order
    pub fn rank(self, rows: &[JoinedResult]) -> Vec<u32> {
        match self {
            RankScope::World => rank_within(rows, |row| row.event_id.as_str()),
            RankScope::Continent => rank_within(rows, |row| {
                (row.event_id.as_str(), row.continent_id.as_str())
            }),
            RankScope::Country => rank_within(rows, |row| {
                (row.event_id.as_str(), row.person_country_id.as_str())
            }),
        }
    }
}

/// Ascending truncated average rank of each row's value within its `key` group.
///
/// Returns one rank per row, in row order.
pub fn rank_within<'a, K, F>(rows: &'a [JoinedResult], key: F) -> Vec<u32>
where
    K: Eq + Hash,
    F: Fn(&'a JoinedResult) -> K,
{
    let mut groups: HashMap<K, Vec<usize>> = HashMap::new();
    for (index, row) in rows.iter().enumerate() {
        groups.entry(key(row)).or_default().push(index);
    }

    let mut ranks = vec![0; rows.len()];
    for mut members in groups.into_values() {
        members.sort_by_key(|&index| rows[index].value);
        let values: Vec<i64> = members.iter().map(|&index| rows[index].value).collect();

        for (index, rank) in members.into_iter().zip(truncated_average_ranks(&values)) {
            ranks[index] = rank;
        }
    }

    ranks
}

/// Truncated average ranks of values already sorted ascending
pub fn truncated_average_ranks(sorted: &[i64]) -> Vec<u32> {
    let mut ranks = Vec::with_capacity(sorted.len());

    let mut start = 0;
    while start < sorted.len() {
        let mut end = start;
        while end + 1 < sorted.len() && sorted[end + 1] == sorted[start] {
            end += 1;
        }

        // 1-based positions start + 1 ..= end + 1
        let rank = ((start + 1 + end + 1) / 2) as u32;
        ranks.extend(std::iter::repeat(rank).take(end - start + 1));

        start = end + 1;
    }

    ranks
}

/// Attach world, continent and country ranks to every aggregated row
pub fn assign_ranks(best: Vec<JoinedResult>) -> Vec<RankRow> {
    let world = RankScope::World.rank(&best);
    let continent = RankScope::Continent.rank(&best);
    let country = RankScope::Country.rank(&best);

    best.into_iter()
        .enumerate()
        .map(|(index, row)| RankRow {
            person_id: row.person_id,
            event_id: row.event_id,
            best: row.value,
            world_rank: world[index],
            continent_rank: continent[index],
            country_rank: country[index],
        })
        .collect()
}
