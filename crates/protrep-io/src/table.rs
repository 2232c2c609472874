use crate::error::ProcessingError;
use ndarray::Array2;
use polars::prelude::*;
use protrep_synth::{VariantTable, COLUMNS};
use std::path::Path;

/// `[ID, Position, Distance_AS, Secondary_structure, Log_fitness]` frame of a variant batch.
pub fn variants_to_frame(table: &VariantTable) -> Result<DataFrame, ProcessingError> {
    let [id, position, distance, structure, fitness] = COLUMNS;
    let frame = DataFrame::new(vec![
        Column::new(id.into(), table.ids().collect::<Vec<&str>>()),
        Column::new(position.into(), table.positions().collect::<Vec<i64>>()),
        Column::new(distance.into(), table.distances().collect::<Vec<f64>>()),
        Column::new(
            structure.into(),
            table.secondary_structures().collect::<Vec<&str>>(),
        ),
        Column::new(fitness.into(), table.log_fitness().collect::<Vec<f64>>()),
    ])?;
    Ok(frame)
}

/// One column per matrix column, named by `names`.
pub fn matrix_to_frame(matrix: &Array2<f64>, names: &[String]) -> Result<DataFrame, ProcessingError> {
    if matrix.ncols() != names.len() {
        return Err(ProcessingError::ColumnCountMismatch {
            expected: matrix.ncols(),
            found: names.len(),
        });
    }
    let columns = matrix
        .columns()
        .into_iter()
        .zip(names)
        .map(|(values, name)| Column::new(name.as_str().into(), values.to_vec()))
        .collect();
    Ok(DataFrame::new(columns)?)
}

pub fn write_csv<P: AsRef<Path>>(frame: &mut DataFrame, path: P) -> Result<(), ProcessingError> {
    let path = path.as_ref();
    let mut file = std::fs::File::create(path)?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(frame)?;
    tracing::info!(path = %path.display(), rows = frame.height(), "wrote csv");
    Ok(())
}

pub fn read_csv<P: AsRef<Path>>(path: P) -> Result<DataFrame, ProcessingError> {
    let frame = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.as_ref().to_path_buf()))?
        .finish()?;
    Ok(frame)
}
