//! Outlier reports and logarithmic transforms over numeric columns.
//!
//! Statistics follow pandas conventions: sample standard deviation (`ddof = 1`) and
//! linearly interpolated quantiles. Missing values are skipped and never reported.
use crate::error::ProcessingError;
use itertools::Itertools;
use polars::prelude::*;
use std::io::Write;
use std::path::Path;

/// How a value is judged to be an outlier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutlierMethod {
    /// Outside `mean ± k·std`.
    ZScore { k: f64 },
    /// Below the `fraction` quantile or above the `1 - fraction` quantile.
    Quantile { fraction: f64 },
}

impl Default for OutlierMethod {
    fn default() -> Self {
        OutlierMethod::ZScore { k: 3.0 }
    }
}

impl OutlierMethod {
    fn validate(&self) -> Result<(), ProcessingError> {
        match *self {
            OutlierMethod::ZScore { k } if !(k.is_finite() && k > 0.0) => {
                Err(ProcessingError::InvalidThreshold(k))
            }
            OutlierMethod::Quantile { fraction } if !(0.0..0.5).contains(&fraction) => {
                Err(ProcessingError::InvalidQuantile(fraction))
            }
            _ => Ok(()),
        }
    }

    /// Inclusive `(low, high)` band of non-outlying values, `None` when undefined.
    fn bounds(&self, values: &[f64]) -> Option<(f64, f64)> {
        match *self {
            OutlierMethod::ZScore { k } => {
                let n = values.len();
                if n < 2 {
                    return None;
                }
                let mean = values.iter().sum::<f64>() / n as f64;
                let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
                let std = var.sqrt();
                Some((mean - k * std, mean + k * std))
            }
            OutlierMethod::Quantile { fraction } => {
                if values.is_empty() {
                    return None;
                }
                let sorted: Vec<f64> = values.iter().copied().sorted_by(f64::total_cmp).collect();
                Some((quantile(&sorted, fraction), quantile(&sorted, 1.0 - fraction)))
            }
        }
    }
}

/// Linear interpolation between closest ranks of an ascending slice.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outlier {
    pub row: usize,
    pub value: f64,
}

/// Outlying entries of `values`, in row order. `None` marks a missing value.
pub fn detect_outliers(
    values: &[Option<f64>],
    method: OutlierMethod,
) -> Result<Vec<Outlier>, ProcessingError> {
    method.validate()?;
    let present: Vec<f64> = values.iter().flatten().copied().collect();
    let Some((low, high)) = method.bounds(&present) else {
        return Ok(Vec::new());
    };
    Ok(values
        .iter()
        .enumerate()
        .filter_map(|(row, value)| value.map(|value| Outlier { row, value }))
        .filter(|o| o.value < low || o.value > high)
        .collect())
}

fn is_numeric(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}

fn numeric_values(frame: &DataFrame, name: &str) -> Result<Vec<Option<f64>>, ProcessingError> {
    let column = frame.column(name)?;
    if !is_numeric(column.dtype()) {
        return Err(ProcessingError::NonNumericColumn {
            column: name.to_string(),
            dtype: column.dtype().to_string(),
        });
    }
    let series = column.as_materialized_series().cast(&DataType::Float64)?;
    Ok(series.f64()?.into_iter().collect())
}

/// Outliers of every numeric column of a frame.
#[derive(Debug, Clone, PartialEq)]
pub struct OutlierReport {
    pub method: OutlierMethod,
    pub columns: Vec<(String, Vec<Outlier>)>,
}

impl OutlierReport {
    /// Scan all numeric columns; text columns are skipped.
    pub fn from_frame(frame: &DataFrame, method: OutlierMethod) -> Result<Self, ProcessingError> {
        let mut columns = Vec::new();
        for column in frame.get_columns() {
            if !is_numeric(column.dtype()) {
                tracing::debug!(column = %column.name(), "skipping non-numeric column");
                continue;
            }
            let name = column.name().to_string();
            let outliers = detect_outliers(&numeric_values(frame, &name)?, method)?;
            columns.push((name, outliers));
        }
        Ok(Self { method, columns })
    }

    pub fn total(&self) -> usize {
        self.columns.iter().map(|(_, o)| o.len()).sum()
    }

    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<(), ProcessingError> {
        writeln!(writer, "Outlier Report")?;
        writeln!(writer)?;
        writeln!(writer, "Total Outliers: {}", self.total())?;
        writeln!(writer)?;
        writeln!(writer, "Outlier Details:")?;
        for (column, outliers) in &self.columns {
            for outlier in outliers {
                writeln!(writer, "{column}\trow {}\t{}", outlier.row, outlier.value)?;
            }
        }
        Ok(())
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ProcessingError> {
        let path = path.as_ref();
        let file = std::fs::File::create(path)?;
        self.write_to(std::io::BufWriter::new(file))?;
        tracing::info!(path = %path.display(), total = self.total(), "outlier report created");
        Ok(())
    }
}

/// Natural logarithm of every present value. Non-positive values are rejected.
pub fn log_transform(values: &[Option<f64>]) -> Result<Vec<Option<f64>>, ProcessingError> {
    values
        .iter()
        .enumerate()
        .map(|(row, value)| match value {
            Some(v) if *v <= 0.0 || v.is_nan() => {
                Err(ProcessingError::NonPositive { row, value: *v })
            }
            Some(v) => Ok(Some(v.ln())),
            None => Ok(None),
        })
        .collect()
}

/// Replace each named numeric column by its natural logarithm.
pub fn log_transform_columns(
    frame: &mut DataFrame,
    columns: &[&str],
) -> Result<(), ProcessingError> {
    for &name in columns {
        let transformed = log_transform(&numeric_values(frame, name)?)?;
        frame.with_column(Column::new(name.into(), transformed))?;
    }
    Ok(())
}

pub fn drop_columns(frame: &DataFrame, columns: &[&str]) -> Result<DataFrame, ProcessingError> {
    let mut frame = frame.clone();
    for &name in columns {
        frame = frame.drop(name)?;
    }
    Ok(frame)
}
