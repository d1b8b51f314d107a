#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Table(#[from] wca_ranks_tables::TableError),

    #[error("Unknown metric '{0}' (expected 'average' or 'single')")]
    UnknownMetric(String),
}

pub type EngineResult<T> = std::result::Result<T, EngineError>;
