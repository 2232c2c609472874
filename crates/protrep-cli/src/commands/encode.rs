use anyhow::{bail, Context};
use ndarray::{concatenate, Array2, Axis};
use protrep_core::{
    AaIndexTable, FeatureSelection, FeatureType, OneHot, SequenceEncoder, AMINO_ACIDS,
};
use protrep_io::{matrix_to_frame, write_csv};
use std::path::Path;

pub fn execute(
    sequence: &str,
    output: &Path,
    features: &str,
    aaindex: Option<&Path>,
) -> anyhow::Result<()> {
    let selection: FeatureSelection = features.parse()?;
    if selection.is_empty() {
        bail!("no feature types requested");
    }

    let mut blocks: Vec<Array2<f64>> = Vec::new();
    let mut names: Vec<String> = Vec::new();

    if selection.contains(FeatureType::OneHot) {
        blocks.push(OneHot.encode(sequence)?);
        names.extend(AMINO_ACIDS.iter().map(|aa| format!("one_hot_{aa}")));
    }

    if selection.contains(FeatureType::AaIndex) {
        let Some(path) = aaindex else {
            bail!("`aa-index` features need an AAIndex table (--aaindex)");
        };
        let table = AaIndexTable::from_json_file(path)
            .with_context(|| format!("failed to load AAIndex table {}", path.display()))?;
        blocks.push(table.encode(sequence)?);
        names.extend((0..table.width()).map(|i| format!("aaindex_{i}")));
    }

    for feature in [FeatureType::IFeatPro, FeatureType::Esm, FeatureType::ProtT5] {
        if selection.contains(feature) {
            tracing::warn!(%feature, "no encoder bundled for this feature type, skipping");
        }
    }

    if blocks.is_empty() {
        bail!("none of the requested feature types can be computed: {features}");
    }

    let views: Vec<_> = blocks.iter().map(|b| b.view()).collect();
    let matrix = concatenate(Axis(1), &views)?;
    let mut frame = matrix_to_frame(&matrix, &names)?;
    write_csv(&mut frame, output)
        .with_context(|| format!("failed to write {}", output.display()))?;
    Ok(())
}
