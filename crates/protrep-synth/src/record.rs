use serde::{Deserialize, Serialize};

/// Column names of a variant table, in output order.
pub const COLUMNS: [&str; 5] = [
    "ID",
    "Position",
    "Distance_AS",
    "Secondary_structure",
    "Log_fitness",
];

/// One synthetic single-point variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantRecord {
    /// `{original}{position}{mutant}`, e.g. `A123C`.
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Position")]
    pub position: i64,
    #[serde(rename = "Distance_AS")]
    pub distance_to_active_site: f64,
    #[serde(rename = "Secondary_structure")]
    pub secondary_structure: String,
    #[serde(rename = "Log_fitness")]
    pub log_fitness: f64,
}

/// Split a variant id such as `A123C` into `('A', 123, 'C')`.
///
/// Any non-digit symbol may stand at either end (`*5A` parses); ids built from digit
/// symbols are ambiguous and yield `None`.
pub fn parse_variant_id(id: &str) -> Option<(char, i64, char)> {
    let mut chars = id.chars();
    let original = chars.next()?;
    let mutant = chars.next_back()?;
    if original.is_ascii_digit() || mutant.is_ascii_digit() {
        return None;
    }
    let position = chars.as_str().parse().ok()?;
    Some((original, position, mutant))
}

/// An ordered batch of variants with a fixed column layout (see [`COLUMNS`]).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariantTable {
    records: Vec<VariantRecord>,
}

impl VariantTable {
    pub fn new(records: Vec<VariantRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[VariantRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VariantRecord> {
        self.records.iter()
    }

    pub fn into_records(self) -> Vec<VariantRecord> {
        self.records
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.records.iter().map(|r| r.id.as_str())
    }

    pub fn positions(&self) -> impl Iterator<Item = i64> + '_ {
        self.records.iter().map(|r| r.position)
    }

    pub fn distances(&self) -> impl Iterator<Item = f64> + '_ {
        self.records.iter().map(|r| r.distance_to_active_site)
    }

    pub fn secondary_structures(&self) -> impl Iterator<Item = &str> + '_ {
        self.records.iter().map(|r| r.secondary_structure.as_str())
    }

    pub fn log_fitness(&self) -> impl Iterator<Item = f64> + '_ {
        self.records.iter().map(|r| r.log_fitness)
    }
}

impl FromIterator<VariantRecord> for VariantTable {
    fn from_iter<I: IntoIterator<Item = VariantRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for VariantTable {
    type Item = VariantRecord;
    type IntoIter = std::vec::IntoIter<VariantRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a VariantTable {
    type Item = &'a VariantRecord;
    type IntoIter = std::slice::Iter<'a, VariantRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
