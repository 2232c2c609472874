use polars::prelude::PolarsError;

#[derive(Debug, thiserror::Error)]
pub enum ProcessingError {
    #[error("column `{column}` has non-numeric type {dtype}")]
    NonNumericColumn { column: String, dtype: String },

    #[error("cannot take the log of {value} (row {row})")]
    NonPositive { row: usize, value: f64 },

    #[error("quantile fraction must lie in [0, 0.5), got {0}")]
    InvalidQuantile(f64),

    #[error("z-score threshold must be positive, got {0}")]
    InvalidThreshold(f64),

    #[error("expected {expected} column names, got {found}")]
    ColumnCountMismatch { expected: usize, found: usize },

    #[error(transparent)]
    Polars(#[from] PolarsError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
