mod aggregate;
mod engine_error;
mod event_ranks;
mod filter;
mod join;
mod metric;
mod rank;
mod ranks_table;

pub use aggregate::{best_per_person, best_per_person_event};
pub use engine_error::{EngineError, EngineResult};
pub use event_ranks::{compute_event_ranks, event_ranks_file_name, write_event_ranks};
pub use filter::{filter_competitions, filter_valid_results, YearRange};
pub use join::{join_competitions, join_results, JoinedResult};
pub use metric::Metric;
pub use rank::{assign_ranks, rank_within, truncated_average_ranks, RankScope};
pub use ranks_table::{build_ranks, compute_ranks, ranks_file_name, write_ranks, TableSummary};

// Re-export the table layer
pub use wca_ranks_tables as tables;
