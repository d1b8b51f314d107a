use crate::{EngineError, EngineResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use wca_ranks_tables::ResultRow;

/// Ranking criterion. Both are lower-is-better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Mean of the attempts in a round (`average` column)
    Average,
    /// Best single attempt (`best` column)
    #[serde(alias = "best")]
    Single,
}

impl Metric {
    pub const ALL: [Metric; 2] = [Metric::Average, Metric::Single];

    /// Name of the Results column holding this metric
    pub fn column(self) -> &'static str {
        match self {
            Metric::Average => "average",
            Metric::Single => "best",
        }
    }

    /// Label used in output file names (`RanksAverage`, `RanksSingle`)
    pub fn file_label(self) -> &'static str {
        match self {
            Metric::Average => "Average",
            Metric::Single => "Single",
        }
    }

    pub fn value(self, row: &ResultRow) -> i64 {
        match self {
            Metric::Average => row.average,
            Metric::Single => row.best,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Average => f.write_str("average"),
            Metric::Single => f.write_str("single"),
        }
    }
}

impl FromStr for Metric {
    type Err = EngineError;

    fn from_str(s: &str) -> EngineResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "average" => Ok(Metric::Average),
            "single" | "best" => Ok(Metric::Single),
            _ => Err(EngineError::UnknownMetric(s.to_string())),
        }
    }
}
