//! # protrep-core
//!
//! Sequence-level building blocks shared by the rest of the workspace.
//!
//! __protrep-core__ provides:
//! * The standard amino-acid alphabet and one/three letter lookups
//! * Sequence encoders (one-hot, AAIndex property lookups)
//! * A closed set of feature-type tags used to pick which encoders to run
//!
//! Pretrained language-model embeddings are not computed here; the [`SequenceEmbedder`]
//! trait marks the seam where a model-backed implementation plugs in.
//!
mod alphabet;
mod encoding;
mod features;

pub use self::alphabet::{aa1_to_index, aa3_to_aa1, index_to_aa1, AMINO_ACIDS};
pub use self::encoding::{
    one_hot, AaIndexTable, EncodingError, OneHot, SequenceEmbedder, SequenceEncoder,
};
pub use self::features::{FeatureSelection, FeatureType, UnknownFeatureType};
