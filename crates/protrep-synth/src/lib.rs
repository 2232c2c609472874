//! # protrep-synth
//!
//! Synthetic protein single-point variant datasets.
//!
//! Each record carries a mutation id, a residue position, a distance to the active site,
//! a secondary structure label and a log-fitness score drawn from a two-branch folded normal
//! mixture. Output is reproducible for a fixed seed.
//!
//! ```text
//! GeneratorConfig
//!        │  validate
//!        ▼
//! ┌───────────────────────┐
//! │   VariantGenerator    │
//! │  - config             │
//! │  - discrete ChaCha8   │
//! │  - continuous ChaCha8 │
//! └──────────┬────────────┘
//!            ▼
//!   VariantTable [ID, Position, Distance_AS, Secondary_structure, Log_fitness]
//! ```
//!
//! # Example
//!
//! ```rust
//! use protrep_synth::{ConfigUpdate, GeneratorConfig, VariantGenerator};
//!
//! let config = GeneratorConfig::builder()
//!     .sample_count(5)
//!     .seed(42)
//!     .position_range((1, 10))
//!     .build();
//! let mut generator = VariantGenerator::new(config).unwrap();
//! let table = generator.generate_table(None);
//! assert_eq!(table.len(), 5);
//!
//! generator
//!     .update_parameters(ConfigUpdate::builder().sample_count(20).build())
//!     .unwrap();
//! assert_eq!(generator.generate_table(None).len(), 20);
//! ```
mod config;
mod generator;
mod record;
mod rng;
mod rounding;

pub use config::{
    default_alphabet, default_secondary_structures, ConfigUpdate, ConfigurationError,
    FitnessBranch, GeneratorConfig, NegativeFitness, NegativeFitnessUpdate, PositiveFitness,
    PositiveFitnessUpdate, DEFAULT_SAMPLE_COUNT,
};
pub use generator::{VariantGenerator, Variants};
pub use record::{parse_variant_id, VariantRecord, VariantTable, COLUMNS};
pub use rounding::round_to;
