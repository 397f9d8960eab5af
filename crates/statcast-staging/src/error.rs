use thiserror::Error;

#[derive(Debug, Error)]
pub enum StagingError {
    /// A declared primary-key column is absent from the batch. Fatal: a
    /// dedup over a partial key would silently drop the wrong rows.
    #[error("primary key columns missing from batch: {0:?}")]
    MissingKeyColumns(Vec<String>),
    #[error(transparent)]
    Frame(#[from] polars::error::PolarsError),
}

pub type Result<T> = std::result::Result<T, StagingError>;
