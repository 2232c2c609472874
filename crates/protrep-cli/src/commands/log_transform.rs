use anyhow::Context;
use protrep_io::{drop_columns, log_transform_columns, read_csv, write_csv};
use std::path::Path;

pub fn execute(
    input: &Path,
    output: &Path,
    columns: &[String],
    drop: &[String],
) -> anyhow::Result<()> {
    let frame =
        read_csv(input).with_context(|| format!("failed to read {}", input.display()))?;
    let drop: Vec<&str> = drop.iter().map(String::as_str).collect();
    let mut frame = drop_columns(&frame, &drop)?;

    let columns: Vec<&str> = columns.iter().map(String::as_str).collect();
    log_transform_columns(&mut frame, &columns)?;
    write_csv(&mut frame, output)
        .with_context(|| format!("failed to write {}", output.display()))?;
    Ok(())
}
