use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("invalid {name}: {value}")]
    Config { name: &'static str, value: String },
    #[error(transparent)]
    Sql(#[from] sqlx::Error),
    #[error(transparent)]
    Frame(#[from] polars::error::PolarsError),
}

pub type Result<T> = std::result::Result<T, LoadError>;
