//! Generator configuration.
//!
//! [`GeneratorConfig`] carries every knob of the synthetic variant model. It can be built
//! field by field through [`GeneratorConfig::builder`], deserialized from a (partial) JSON
//! document, or left at its defaults. [`ConfigUpdate`] is the partial counterpart used by
//! [`VariantGenerator::update_parameters`](crate::VariantGenerator::update_parameters).
use crate::rounding::round_to;
use bon::Builder;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SAMPLE_COUNT: usize = 950;

pub fn default_alphabet() -> Vec<char> {
    "ACDEFGHIKLMNPQRSTVWY".chars().collect()
}

pub fn default_secondary_structures() -> Vec<String> {
    ["alpha", "beta", "turn", "coil", "loop"]
        .into_iter()
        .map(String::from)
        .collect()
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("sample count must be positive")]
    ZeroSampleCount,

    #[error("amino acid alphabet needs at least 2 distinct symbols, found {distinct}")]
    AlphabetTooSmall { distinct: usize },

    #[error("secondary structure labels must not be empty")]
    NoSecondaryStructureLabels,

    #[error("secondary structure label must not be blank")]
    BlankSecondaryStructureLabel,

    #[error("position range is inverted: [{lo}, {hi}]")]
    InvertedPositionRange { lo: i64, hi: i64 },

    #[error("distance range must be finite, ordered and on the 0.01 grid, got [{lo}, {hi}]")]
    InvalidDistanceRange { lo: f64, hi: f64 },

    #[error("positive fitness probability must lie in [0, 1], got {0}")]
    ProbabilityOutOfRange(f64),

    #[error("{branch} fitness std_dev must be positive and finite, got {std_dev}")]
    InvalidStdDev { branch: FitnessBranch, std_dev: f64 },

    #[error("{branch} fitness parameter `{name}` must be finite, got {value}")]
    NonFiniteParameter {
        branch: FitnessBranch,
        name: &'static str,
        value: f64,
    },

    #[error("{branch} fitness `{name}` must lie on the 0.001 grid, got {value}")]
    OffGridFitnessBound {
        branch: FitnessBranch,
        name: &'static str,
        value: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitnessBranch {
    Positive,
    Negative,
}

impl std::fmt::Display for FitnessBranch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FitnessBranch::Positive => write!(f, "positive"),
            FitnessBranch::Negative => write!(f, "negative"),
        }
    }
}

/// Normal parameters for beneficial variants. Samples are folded to `|v|` and capped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PositiveFitness {
    pub mean: f64,
    pub std_dev: f64,
    pub cap: f64,
}

impl Default for PositiveFitness {
    fn default() -> Self {
        Self {
            mean: 1.0,
            std_dev: 1.0,
            cap: 3.0,
        }
    }
}

/// Normal parameters for deleterious variants. Samples are folded to `-|v|` and floored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NegativeFitness {
    pub mean: f64,
    pub std_dev: f64,
    pub floor: f64,
}

impl Default for NegativeFitness {
    fn default() -> Self {
        Self {
            mean: 3.0,
            std_dev: 2.0,
            floor: -7.0,
        }
    }
}

/// Configuration of the synthetic variant model.
///
/// ```
/// use protrep_synth::GeneratorConfig;
///
/// let config = GeneratorConfig::builder()
///     .sample_count(5)
///     .seed(42)
///     .position_range((1, 10))
///     .build();
/// assert_eq!(config.distance_range, (1.0, 20.0));
/// ```
#[derive(Debug, Clone, PartialEq, Builder, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Number of records produced by a default-sized batch.
    #[builder(default = DEFAULT_SAMPLE_COUNT)]
    pub sample_count: usize,

    /// Fixed seed for reproducible output. `None` draws from OS entropy.
    pub seed: Option<u64>,

    #[builder(default = default_alphabet())]
    pub amino_acid_alphabet: Vec<char>,

    #[builder(default = default_secondary_structures())]
    pub secondary_structure_labels: Vec<String>,

    /// Inclusive residue position interval.
    #[builder(default = (1, 500))]
    pub position_range: (i64, i64),

    /// Inclusive distance interval in Ångströms.
    #[builder(default = (1.0, 20.0))]
    pub distance_range: (f64, f64),

    /// Probability that a record's fitness is drawn from the positive branch.
    #[builder(default = 0.3)]
    pub positive_fitness_probability: f64,

    #[builder(default)]
    pub positive_fitness_params: PositiveFitness,

    #[builder(default)]
    pub negative_fitness_params: NegativeFitness,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl GeneratorConfig {
    /// Collapse duplicate alphabet symbols and labels, then check every invariant.
    pub fn validated(mut self) -> Result<Self, ConfigurationError> {
        let symbols = self.amino_acid_alphabet.len();
        self.amino_acid_alphabet = self.amino_acid_alphabet.into_iter().unique().collect();
        if self.amino_acid_alphabet.len() != symbols {
            tracing::warn!(
                "collapsed {} duplicate amino acid symbol(s)",
                symbols - self.amino_acid_alphabet.len()
            );
        }
        self.secondary_structure_labels = self
            .secondary_structure_labels
            .into_iter()
            .unique()
            .collect();
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.sample_count == 0 {
            return Err(ConfigurationError::ZeroSampleCount);
        }

        let distinct = self.amino_acid_alphabet.iter().unique().count();
        if distinct < 2 {
            return Err(ConfigurationError::AlphabetTooSmall { distinct });
        }

        if self.secondary_structure_labels.is_empty() {
            return Err(ConfigurationError::NoSecondaryStructureLabels);
        }
        if self
            .secondary_structure_labels
            .iter()
            .any(|label| label.trim().is_empty())
        {
            return Err(ConfigurationError::BlankSecondaryStructureLabel);
        }

        let (lo, hi) = self.position_range;
        if lo > hi {
            return Err(ConfigurationError::InvertedPositionRange { lo, hi });
        }

        // samples are rounded to 2 decimals, so the bounds must already be
        let (lo, hi) = self.distance_range;
        if !(lo.is_finite() && hi.is_finite() && lo <= hi)
            || !(hi - lo).is_finite()
            || round_to(lo, 2) != lo
            || round_to(hi, 2) != hi
        {
            return Err(ConfigurationError::InvalidDistanceRange { lo, hi });
        }

        let p = self.positive_fitness_probability;
        if !(0.0..=1.0).contains(&p) {
            return Err(ConfigurationError::ProbabilityOutOfRange(p));
        }

        let positive = &self.positive_fitness_params;
        check_branch(
            FitnessBranch::Positive,
            positive.std_dev,
            [("mean", positive.mean), ("cap", positive.cap)],
        )?;
        check_bound(FitnessBranch::Positive, "cap", positive.cap)?;
        let negative = &self.negative_fitness_params;
        check_branch(
            FitnessBranch::Negative,
            negative.std_dev,
            [("mean", negative.mean), ("floor", negative.floor)],
        )?;
        check_bound(FitnessBranch::Negative, "floor", negative.floor)?;

        Ok(())
    }

    /// Overwrite the fields present in `update`, leaving the rest untouched.
    pub fn apply(&mut self, update: ConfigUpdate) {
        if let Some(sample_count) = update.sample_count {
            self.sample_count = sample_count;
        }
        if let Some(alphabet) = update.amino_acid_alphabet {
            self.amino_acid_alphabet = alphabet;
        }
        if let Some(labels) = update.secondary_structure_labels {
            self.secondary_structure_labels = labels;
        }
        if let Some(range) = update.position_range {
            self.position_range = range;
        }
        if let Some(range) = update.distance_range {
            self.distance_range = range;
        }
        if let Some(p) = update.positive_fitness_probability {
            self.positive_fitness_probability = p;
        }
        if let Some(params) = update.positive_fitness_params {
            let current = &mut self.positive_fitness_params;
            current.mean = params.mean.unwrap_or(current.mean);
            current.std_dev = params.std_dev.unwrap_or(current.std_dev);
            current.cap = params.cap.unwrap_or(current.cap);
        }
        if let Some(params) = update.negative_fitness_params {
            let current = &mut self.negative_fitness_params;
            current.mean = params.mean.unwrap_or(current.mean);
            current.std_dev = params.std_dev.unwrap_or(current.std_dev);
            current.floor = params.floor.unwrap_or(current.floor);
        }
    }
}

fn check_branch<const N: usize>(
    branch: FitnessBranch,
    std_dev: f64,
    params: [(&'static str, f64); N],
) -> Result<(), ConfigurationError> {
    if !(std_dev.is_finite() && std_dev > 0.0) {
        return Err(ConfigurationError::InvalidStdDev { branch, std_dev });
    }
    for (name, value) in params {
        if !value.is_finite() {
            return Err(ConfigurationError::NonFiniteParameter {
                branch,
                name,
                value,
            });
        }
    }
    Ok(())
}

/// Fitness is rounded to 3 decimals, so a cap or floor off that grid could leak unrounded.
fn check_bound(
    branch: FitnessBranch,
    name: &'static str,
    value: f64,
) -> Result<(), ConfigurationError> {
    if round_to(value, 3) != value {
        return Err(ConfigurationError::OffGridFitnessBound {
            branch,
            name,
            value,
        });
    }
    Ok(())
}

/// Partial update of the positive fitness branch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Builder, Deserialize)]
pub struct PositiveFitnessUpdate {
    pub mean: Option<f64>,
    pub std_dev: Option<f64>,
    pub cap: Option<f64>,
}

/// Partial update of the negative fitness branch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Builder, Deserialize)]
pub struct NegativeFitnessUpdate {
    pub mean: Option<f64>,
    pub std_dev: Option<f64>,
    pub floor: Option<f64>,
}

/// Fields to replace on a live generator. `None` keeps the current value.
///
/// Updates never reseed, so there is no seed field.
#[derive(Debug, Clone, Default, PartialEq, Builder, Deserialize)]
pub struct ConfigUpdate {
    pub sample_count: Option<usize>,
    pub amino_acid_alphabet: Option<Vec<char>>,
    pub secondary_structure_labels: Option<Vec<String>>,
    pub position_range: Option<(i64, i64)>,
    pub distance_range: Option<(f64, f64)>,
    pub positive_fitness_probability: Option<f64>,
    pub positive_fitness_params: Option<PositiveFitnessUpdate>,
    pub negative_fitness_params: Option<NegativeFitnessUpdate>,
}
