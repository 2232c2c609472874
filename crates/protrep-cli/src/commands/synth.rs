use anyhow::Context;
use clap::Args;
use protrep_io::{variants_to_frame, write_csv};
use protrep_synth::{ConfigUpdate, GeneratorConfig, VariantGenerator};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct SynthArgs {
    #[arg(short, long)]
    pub output: PathBuf,

    /// JSON generator configuration; flags below override it
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short = 'n', long)]
    pub samples: Option<usize>,

    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long)]
    pub position_min: Option<i64>,

    #[arg(long)]
    pub position_max: Option<i64>,

    #[arg(long)]
    pub distance_min: Option<f64>,

    #[arg(long)]
    pub distance_max: Option<f64>,

    #[arg(long)]
    pub positive_prob: Option<f64>,
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<GeneratorConfig> {
    let Some(path) = path else {
        return Ok(GeneratorConfig::default());
    };
    let file = std::fs::File::open(path)
        .with_context(|| format!("failed to open config {}", path.display()))?;
    serde_json::from_reader(std::io::BufReader::new(file))
        .with_context(|| format!("invalid generator config {}", path.display()))
}

pub fn execute(args: SynthArgs) -> anyhow::Result<()> {
    let mut config = load_config(args.config.as_ref())?;
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    let mut generator = VariantGenerator::new(config)?;

    let (pos_lo, pos_hi) = generator.config().position_range;
    let (dist_lo, dist_hi) = generator.config().distance_range;
    let position_range = (args.position_min.is_some() || args.position_max.is_some()).then(|| {
        (
            args.position_min.unwrap_or(pos_lo),
            args.position_max.unwrap_or(pos_hi),
        )
    });
    let distance_range = (args.distance_min.is_some() || args.distance_max.is_some()).then(|| {
        (
            args.distance_min.unwrap_or(dist_lo),
            args.distance_max.unwrap_or(dist_hi),
        )
    });
    generator.update_parameters(
        ConfigUpdate::builder()
            .maybe_sample_count(args.samples)
            .maybe_position_range(position_range)
            .maybe_distance_range(distance_range)
            .maybe_positive_fitness_probability(args.positive_prob)
            .build(),
    )?;

    let table = generator.generate_table(None);
    let mut frame = variants_to_frame(&table)?;
    write_csv(&mut frame, &args.output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    Ok(())
}
