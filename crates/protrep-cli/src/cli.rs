use super::commands;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a synthetic single-point variant dataset as CSV
    Synth(commands::synth::SynthArgs),
    /// Encode a protein sequence into per-residue features
    Encode {
        #[arg(short, long)]
        sequence: String,
        #[arg(short, long)]
        output: PathBuf,
        /// Comma separated feature tags, or `all`
        #[arg(short, long, default_value = "one-hot")]
        features: String,
        /// JSON AAIndex table, required for `aa-index`
        #[arg(long)]
        aaindex: Option<PathBuf>,
    },
    /// Write an outlier report for the numeric columns of a CSV
    Outliers {
        #[arg(short, long)]
        input: PathBuf,
        #[arg(short, long)]
        output: PathBuf,
        #[arg(short, long, value_enum, default_value_t = Method::Zscore)]
        method: Method,
        /// z-score multiplier or quantile fraction
        #[arg(short, long)]
        threshold: Option<f64>,
    },
    /// Natural-log transform columns of a CSV
    LogTransform {
        #[arg(short, long)]
        input: PathBuf,
        #[arg(short, long)]
        output: PathBuf,
        #[arg(short, long, value_delimiter = ',', required = true)]
        columns: Vec<String>,
        /// Columns removed before writing
        #[arg(long, value_delimiter = ',')]
        drop: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Method {
    Zscore,
    Quantile,
}

impl Cli {
    pub fn execute(self) -> anyhow::Result<()> {
        match self.command {
            Commands::Synth(args) => commands::synth::execute(args),
            Commands::Encode {
                sequence,
                output,
                features,
                aaindex,
            } => commands::encode::execute(&sequence, &output, &features, aaindex.as_deref()),
            Commands::Outliers {
                input,
                output,
                method,
                threshold,
            } => commands::outliers::execute(&input, &output, method, threshold),
            Commands::LogTransform {
                input,
                output,
                columns,
                drop,
            } => commands::log_transform::execute(&input, &output, &columns, &drop),
        }
    }
}
