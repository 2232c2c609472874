use crate::cli::Method;
use anyhow::Context;
use protrep_io::{read_csv, OutlierMethod, OutlierReport};
use std::path::Path;

pub fn execute(
    input: &Path,
    output: &Path,
    method: Method,
    threshold: Option<f64>,
) -> anyhow::Result<()> {
    let frame =
        read_csv(input).with_context(|| format!("failed to read {}", input.display()))?;
    let method = match method {
        Method::Zscore => OutlierMethod::ZScore {
            k: threshold.unwrap_or(3.0),
        },
        Method::Quantile => OutlierMethod::Quantile {
            fraction: threshold.unwrap_or(0.1),
        },
    };
    let report = OutlierReport::from_frame(&frame, method)?;
    report.save(output)?;
    Ok(())
}
