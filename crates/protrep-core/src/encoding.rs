//! Sequence Encoders
//!
//! Convert a protein sequence into a `[residues, features]` matrix.
//!
//! - [`OneHot`] / [`one_hot`]: indicator columns over [`AMINO_ACIDS`](crate::AMINO_ACIDS)
//! - [`AaIndexTable`]: per-residue physicochemical properties from an AAIndex table
//!
//! Embeddings from pretrained protein language models go through [`SequenceEmbedder`].
use crate::alphabet::{aa1_to_index, AMINO_ACIDS};
use ndarray::Array2;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum EncodingError {
    #[error("unknown residue '{residue}' at position {position}")]
    UnknownResidue { residue: char, position: usize },

    #[error("empty sequence")]
    EmptySequence,

    #[error("AAIndex key '{0}' is not a single residue")]
    InvalidKey(String),

    #[error("AAIndex table lists residue '{0}' more than once (keys are case-insensitive)")]
    DuplicateResidue(char),

    #[error("AAIndex entry for '{residue}' has {found} values, expected {expected}")]
    RaggedTable {
        residue: char,
        expected: usize,
        found: usize,
    },

    #[error("AAIndex table is empty")]
    EmptyTable,

    #[error("failed to parse AAIndex table: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Encodes a full sequence into a per-residue feature matrix.
pub trait SequenceEncoder {
    /// Number of feature columns produced per residue.
    fn width(&self) -> usize;
    fn encode(&self, sequence: &str) -> Result<Array2<f64>, EncodingError>;
}

/// A pooled, fixed-width embedding for a whole sequence (ESM, ProtT5, ...).
///
/// Model loading and inference live outside this crate.
pub trait SequenceEmbedder {
    type Error: std::error::Error + Send + Sync + 'static;

    fn embed(&self, sequence: &str) -> Result<Vec<f32>, Self::Error>;
}

/// One-hot encoding over the 20 standard amino acids.
#[derive(Debug, Clone, Copy, Default)]
pub struct OneHot;

impl SequenceEncoder for OneHot {
    fn width(&self) -> usize {
        AMINO_ACIDS.len()
    }

    fn encode(&self, sequence: &str) -> Result<Array2<f64>, EncodingError> {
        one_hot(sequence)
    }
}

/// `[len, 20]` matrix with a single 1.0 per row at the residue's alphabet index.
pub fn one_hot(sequence: &str) -> Result<Array2<f64>, EncodingError> {
    if sequence.is_empty() {
        return Err(EncodingError::EmptySequence);
    }
    let residues: Vec<char> = sequence.chars().collect();
    let mut matrix = Array2::<f64>::zeros((residues.len(), AMINO_ACIDS.len()));
    for (position, residue) in residues.iter().enumerate() {
        let column = aa1_to_index(*residue).ok_or(EncodingError::UnknownResidue {
            residue: *residue,
            position,
        })?;
        matrix[[position, column]] = 1.0;
    }
    Ok(matrix)
}

/// Residue -> property vector lookup, typically a slice of AAIndex1.
///
/// All entries share the same number of properties.
#[derive(Debug, Clone)]
pub struct AaIndexTable {
    entries: HashMap<char, Vec<f64>>,
    width: usize,
}

impl AaIndexTable {
    pub fn new(entries: HashMap<char, Vec<f64>>) -> Result<Self, EncodingError> {
        let width = entries
            .values()
            .next()
            .map(Vec::len)
            .ok_or(EncodingError::EmptyTable)?;
        for (residue, values) in &entries {
            if values.len() != width {
                return Err(EncodingError::RaggedTable {
                    residue: *residue,
                    expected: width,
                    found: values.len(),
                });
            }
        }
        let mut upper = HashMap::with_capacity(entries.len());
        for (residue, values) in entries {
            let residue = residue.to_ascii_uppercase();
            if upper.insert(residue, values).is_some() {
                return Err(EncodingError::DuplicateResidue(residue));
            }
        }
        Ok(Self {
            entries: upper,
            width,
        })
    }

    /// Parse a JSON object of the form `{"A": [1.8, ...], "C": [2.5, ...]}`.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, EncodingError> {
        let raw: HashMap<String, Vec<f64>> = serde_json::from_reader(reader)?;
        let mut entries = HashMap::with_capacity(raw.len());
        for (key, values) in raw {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(residue), None) => {
                    entries.insert(residue, values);
                }
                _ => return Err(EncodingError::InvalidKey(key)),
            }
        }
        Self::new(entries)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, EncodingError> {
        let file = std::fs::File::open(path)?;
        Self::from_json_reader(std::io::BufReader::new(file))
    }

    pub fn get(&self, residue: char) -> Option<&[f64]> {
        self.entries
            .get(&residue.to_ascii_uppercase())
            .map(Vec::as_slice)
    }
}

impl SequenceEncoder for AaIndexTable {
    fn width(&self) -> usize {
        self.width
    }

    fn encode(&self, sequence: &str) -> Result<Array2<f64>, EncodingError> {
        if sequence.is_empty() {
            return Err(EncodingError::EmptySequence);
        }
        let residues: Vec<char> = sequence.chars().collect();
        let mut matrix = Array2::<f64>::zeros((residues.len(), self.width));
        for (position, residue) in residues.iter().enumerate() {
            let values = self.get(*residue).ok_or(EncodingError::UnknownResidue {
                residue: *residue,
                position,
            })?;
            for (column, value) in values.iter().enumerate() {
                matrix[[position, column]] = *value;
            }
        }
        Ok(matrix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_hot_rows() {
        let matrix = one_hot("ACDY").unwrap();
        assert_eq!(matrix.dim(), (4, 20));
        for row in matrix.rows() {
            assert_eq!(row.sum(), 1.0);
        }
        assert_eq!(matrix[[0, 0]], 1.0);
        assert_eq!(matrix[[1, 1]], 1.0);
        assert_eq!(matrix[[3, 19]], 1.0);
    }

    #[test]
    fn test_one_hot_lowercase() {
        assert_eq!(one_hot("acd").unwrap(), one_hot("ACD").unwrap());
    }

    #[test]
    fn test_one_hot_unknown_residue() {
        let err = one_hot("ACBD").unwrap_err();
        assert!(matches!(
            err,
            EncodingError::UnknownResidue {
                residue: 'B',
                position: 2
            }
        ));
        assert!(matches!(one_hot(""), Err(EncodingError::EmptySequence)));
    }

    #[test]
    fn test_aaindex_encode() {
        let json = r#"{"A": [1.8, 0.0], "C": [2.5, 1.0], "G": [-0.4, 0.5]}"#;
        let table = AaIndexTable::from_json_reader(json.as_bytes()).unwrap();
        assert_eq!(table.width(), 2);
        let matrix = table.encode("GAC").unwrap();
        assert_eq!(matrix.dim(), (3, 2));
        assert_eq!(matrix[[0, 0]], -0.4);
        assert_eq!(matrix[[1, 0]], 1.8);
        assert_eq!(matrix[[2, 1]], 1.0);
        assert!(matches!(
            table.encode("AW"),
            Err(EncodingError::UnknownResidue { residue: 'W', .. })
        ));
    }

    #[test]
    fn test_aaindex_rejects_bad_tables() {
        let ragged = r#"{"A": [1.8, 0.0], "C": [2.5]}"#;
        assert!(matches!(
            AaIndexTable::from_json_reader(ragged.as_bytes()),
            Err(EncodingError::RaggedTable { .. })
        ));
        let bad_key = r#"{"ALA": [1.8]}"#;
        assert!(matches!(
            AaIndexTable::from_json_reader(bad_key.as_bytes()),
            Err(EncodingError::InvalidKey(_))
        ));
        assert!(matches!(
            AaIndexTable::from_json_reader("{}".as_bytes()),
            Err(EncodingError::EmptyTable)
        ));
    }

    #[test]
    fn test_aaindex_rejects_case_collisions() {
        let json = r#"{"a": [1.0], "A": [2.0], "C": [3.0]}"#;
        assert!(matches!(
            AaIndexTable::from_json_reader(json.as_bytes()),
            Err(EncodingError::DuplicateResidue('A'))
        ));

        let table = AaIndexTable::from_json_reader(r#"{"a": [1.0], "c": [3.0]}"#.as_bytes())
            .unwrap();
        assert_eq!(table.get('A'), Some(&[1.0][..]));
    }
}
