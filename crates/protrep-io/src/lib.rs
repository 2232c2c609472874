//! # protrep-io
//!
//! Tabular plumbing for protrep.
//!
//! - [`variants_to_frame`] / [`matrix_to_frame`]: turn generated variants and encoded
//!   sequences into polars `DataFrame`s
//! - [`write_csv`] / [`read_csv`]: CSV persistence
//! - [`processing`]: outlier reports and logarithmic transforms over numeric columns
//!
mod error;
pub mod processing;
mod table;

pub use self::error::ProcessingError;
pub use self::processing::{
    detect_outliers, drop_columns, log_transform, log_transform_columns, Outlier, OutlierMethod,
    OutlierReport,
};
pub use self::table::{matrix_to_frame, read_csv, variants_to_frame, write_csv};
