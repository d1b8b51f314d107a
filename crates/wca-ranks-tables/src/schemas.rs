/*!
# Table Schemas

Typed rows for the WCA export tables this workspace reads, and for the
ranking tables it writes.

Input rows only name the columns the pipeline needs. Any other column in
the export is ignored during deserialization.
*/

use serde::{Deserialize, Serialize};

// ================================================================================================
// Table Names
// ================================================================================================

pub const COMPETITIONS_TABLE: &str = "Competitions";
pub const COUNTRIES_TABLE: &str = "Countries";
pub const RESULTS_TABLE: &str = "Results";
pub const EVENTS_TABLE: &str = "Events";

// ================================================================================================
// Input Schemas
// ================================================================================================

/// Columns that must be present in the Competitions table
pub const COMPETITIONS_REQUIRED_HEADERS: &[&str] = &["id", "year"];

/// One competition; only its id and year matter here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompetitionRow {
    pub id: String,
    pub year: i32,
}

/// Columns that must be present in the Countries table
pub const COUNTRIES_REQUIRED_HEADERS: &[&str] = &["id", "continentId"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CountryRow {
    pub id: String,

    #[serde(rename = "continentId")]
    pub continent_id: String,
}

/// Columns that must be present in the Results table
pub const RESULTS_REQUIRED_HEADERS: &[&str] = &[
    "competitionId",
    "personId",
    "personCountryId",
    "eventId",
    "average",
    "best",
];

/// One performance of a person in one event at one competition.
///
/// `average` and `best` use the export's encoding: positive values are valid
/// results, `0` means no result, `-1` DNF and `-2` DNS.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResultRow {
    pub competition_id: String,
    pub person_id: String,
    pub person_country_id: String,
    pub event_id: String,
    pub average: i64,
    pub best: i64,
}

/// Columns that must be present in the Events table
pub const EVENTS_REQUIRED_HEADERS: &[&str] = &["id"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EventRow {
    pub id: String,
}

// ================================================================================================
// Output Schemas
// ================================================================================================

/// Header of the combined ranks table, in column order
pub const RANKS_CSV_HEADERS: &[&str] = &[
    "personId",
    "eventId",
    "best",
    "worldRank",
    "continentRank",
    "countryRank",
];

/// Row of `RanksAverage*.csv` / `RanksSingle*.csv`.
///
/// `best` holds the ranking metric whichever column it came from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RankRow {
    pub person_id: String,
    pub event_id: String,
    pub best: i64,
    pub world_rank: u32,
    pub continent_rank: u32,
    pub country_rank: u32,
}

/// Header of a per-event ranks table
pub const EVENT_RANKS_CSV_HEADERS: &[&str] = &["personId", "best"];

/// Row of a per-event `Ranks*_<eventId>.csv` table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EventRankRow {
    pub person_id: String,
    pub best: i64,
}
