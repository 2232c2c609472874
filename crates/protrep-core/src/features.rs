use std::collections::BTreeSet;
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// The feature families a sequence can be represented by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString, EnumIter)]
pub enum FeatureType {
    #[strum(serialize = "one-hot")]
    OneHot,
    #[strum(serialize = "aa-index")]
    AaIndex,
    #[strum(serialize = "ifeatpro")]
    IFeatPro,
    #[strum(serialize = "esm")]
    Esm,
    #[strum(serialize = "prot-t5")]
    ProtT5,
}

#[derive(Debug, thiserror::Error)]
#[error("unknown feature type '{0}', expected one of: all, {tags}", tags = known_tags())]
pub struct UnknownFeatureType(pub String);

fn known_tags() -> String {
    FeatureType::iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// A set of requested feature types.
///
/// Parsed from a comma separated list of tags; `all` selects every [`FeatureType`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeatureSelection(BTreeSet<FeatureType>);

impl FeatureSelection {
    pub fn all() -> Self {
        Self(FeatureType::iter().collect())
    }

    pub fn contains(&self, feature: FeatureType) -> bool {
        self.0.contains(&feature)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = FeatureType> + '_ {
        self.0.iter().copied()
    }
}

impl FromStr for FeatureSelection {
    type Err = UnknownFeatureType;

    fn from_str(tags: &str) -> Result<Self, Self::Err> {
        let mut selected = BTreeSet::new();
        for tag in tags.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            if tag.eq_ignore_ascii_case("all") {
                return Ok(Self::all());
            }
            let feature = FeatureType::from_str(&tag.to_ascii_lowercase())
                .map_err(|_| UnknownFeatureType(tag.to_string()))?;
            selected.insert(feature);
        }
        Ok(Self(selected))
    }
}

impl FromIterator<FeatureType> for FeatureSelection {
    fn from_iter<I: IntoIterator<Item = FeatureType>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named_tags() {
        let selection: FeatureSelection = "one-hot, aa-index".parse().unwrap();
        assert!(selection.contains(FeatureType::OneHot));
        assert!(selection.contains(FeatureType::AaIndex));
        assert!(!selection.contains(FeatureType::Esm));
        assert!(!selection.contains(FeatureType::ProtT5));
    }

    #[test]
    fn test_parse_all() {
        let selection: FeatureSelection = "esm,all".parse().unwrap();
        assert_eq!(selection, FeatureSelection::all());
        for feature in FeatureType::iter() {
            assert!(selection.contains(feature));
        }
    }

    #[test]
    fn test_unknown_tag_is_rejected() {
        let err = "one-hot,blosum".parse::<FeatureSelection>().unwrap_err();
        assert_eq!(err.0, "blosum");
        assert!(err.to_string().contains("prot-t5"));
    }

    #[test]
    fn test_empty_selection() {
        let selection: FeatureSelection = "".parse().unwrap();
        assert!(selection.is_empty());
    }
}
