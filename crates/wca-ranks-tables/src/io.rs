/*!
# Table I/O

Loading export tables from tab-separated files and writing ranking tables as
comma-separated files.
*/

use crate::{
    errors::{TableError, TableResult},
    schemas::{
        CompetitionRow, CountryRow, EventRow, ResultRow, COMPETITIONS_REQUIRED_HEADERS,
        COMPETITIONS_TABLE, COUNTRIES_REQUIRED_HEADERS, COUNTRIES_TABLE, EVENTS_REQUIRED_HEADERS,
        EVENTS_TABLE, RESULTS_REQUIRED_HEADERS, RESULTS_TABLE,
    },
};
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use serde::{de::DeserializeOwned, Serialize};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default directory holding the export files
pub const DEFAULT_DATA_DIR: &str = "data";

/// File name prefix used by the WCA results export
pub const DEFAULT_FILE_PREFIX: &str = "WCA_export_";

// ================================================================================================
// Table Source
// ================================================================================================

/// Where the export tables live on disk.
///
/// A table named `Results` resolves to `<data_dir>/<file_prefix>Results.tsv`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSource {
    pub data_dir: PathBuf,
    pub file_prefix: String,
}

impl Default for TableSource {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            file_prefix: DEFAULT_FILE_PREFIX.to_string(),
        }
    }
}

impl TableSource {
    pub fn new(data_dir: impl Into<PathBuf>, file_prefix: impl Into<String>) -> Self {
        Self {
            data_dir: data_dir.into(),
            file_prefix: file_prefix.into(),
        }
    }

    /// Path of the file backing `table`
    pub fn path(&self, table: &str) -> PathBuf {
        self.data_dir.join(format!("{}{}.tsv", self.file_prefix, table))
    }

    pub fn competitions(&self) -> TableResult<Vec<CompetitionRow>> {
        read_table(
            self.path(COMPETITIONS_TABLE),
            COMPETITIONS_TABLE,
            COMPETITIONS_REQUIRED_HEADERS,
        )
    }

    pub fn countries(&self) -> TableResult<Vec<CountryRow>> {
        read_table(
            self.path(COUNTRIES_TABLE),
            COUNTRIES_TABLE,
            COUNTRIES_REQUIRED_HEADERS,
        )
    }

    pub fn results(&self) -> TableResult<Vec<ResultRow>> {
        read_table(
            self.path(RESULTS_TABLE),
            RESULTS_TABLE,
            RESULTS_REQUIRED_HEADERS,
        )
    }

    pub fn events(&self) -> TableResult<Vec<EventRow>> {
        read_table(self.path(EVENTS_TABLE), EVENTS_TABLE, EVENTS_REQUIRED_HEADERS)
    }
}

// ================================================================================================
// TSV Reading with Validation
// ================================================================================================

/// Read a tab-separated table, checking that every required column is present.
///
/// Rows with a different number of fields than the header, or with values
/// that do not parse into `T`, fail the whole read.
pub fn read_table<T, P>(path: P, table: &str, required_headers: &[&str]) -> TableResult<Vec<T>>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => TableError::NotFound {
            path: path.to_path_buf(),
        },
        _ => TableError::Io(e),
    })?;

    // The export is raw TSV: names can contain quote characters.
    let mut rdr = ReaderBuilder::new()
        .delimiter(b'\t')
        .quoting(false)
        .from_reader(file);

    let headers = rdr.headers()?.clone();
    validate_headers(&headers, required_headers, table)?;

    let mut rows = Vec::new();
    for result in rdr.deserialize() {
        let row: T = result?;
        rows.push(row);
    }

    debug!(table, rows = rows.len(), path = %path.display(), "Loaded table");
    Ok(rows)
}

// ================================================================================================
// CSV Writing
// ================================================================================================

/// Write rows as comma-separated values, replacing any existing file.
///
/// The header row is always written, so an empty table is still a valid CSV
/// file. Returns the number of data rows written.
pub fn write_csv<T, P>(path: P, headers: &[&str], rows: &[T]) -> TableResult<usize>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(path)?;
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(file);

    wtr.write_record(headers)?;
    for row in rows {
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(rows.len())
}

// ================================================================================================
// Header Validation
// ================================================================================================

fn validate_headers(actual: &StringRecord, required: &[&str], table: &str) -> TableResult<()> {
    for column in required {
        if !actual.iter().any(|header| header == *column) {
            return Err(TableError::MissingHeader {
                table: table.to_string(),
                column: column.to_string(),
            });
        }
    }

    Ok(())
}

// ================================================================================================
// Tests
// ================================================================================================
