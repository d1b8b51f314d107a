use std::path::PathBuf;
use thiserror::Error;

pub type TableResult<T> = Result<T, TableError>;

#[derive(Error, Debug)]
pub enum TableError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Table file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("{table}: missing required column '{column}'")]
    MissingHeader { table: String, column: String },
}
