/*!
# WCA Export Tables

This crate owns the on-disk contracts of the ranking pipeline:

- **Input**: the tab-separated tables of the WCA results export
  (`Competitions`, `Countries`, `Results`, `Events`), each with a header row.
- **Output**: comma-separated ranking tables (`RanksAverage*.csv`,
  `RanksSingle*.csv` and the per-event `Ranks*_<eventId>.csv`).

## Usage

```rust,no_run
use wca_ranks_tables::{TableResult, TableSource};

fn example() -> TableResult<()> {
    let source = TableSource::default(); // data/WCA_export_<Table>.tsv
    let competitions = source.competitions()?;
    let results = source.results()?;
    println!("{} competitions, {} results", competitions.len(), results.len());
    Ok(())
}
```
*/

pub mod errors;
pub mod io;
pub mod schemas;

// Re-export main types for convenience
pub use errors::{TableError, TableResult};
pub use io::{read_table, write_csv, TableSource, DEFAULT_DATA_DIR, DEFAULT_FILE_PREFIX};
pub use schemas::*;
