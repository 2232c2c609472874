//! Synthetic single-point variant generator.

use crate::config::{ConfigUpdate, ConfigurationError, GeneratorConfig};
use crate::record::{VariantRecord, VariantTable};
use crate::rng::EntropySource;
use crate::rounding::round_to;
use rand::Rng;

/// Produces [`VariantRecord`]s from a validated [`GeneratorConfig`].
///
/// Every sampler draws from randomness owned by this instance, so generators with different
/// seeds can coexist. Two generators built from the same seeded config yield the same records.
pub struct VariantGenerator {
    config: GeneratorConfig,
    entropy: EntropySource,
}

impl VariantGenerator {
    pub fn new(config: GeneratorConfig) -> Result<Self, ConfigurationError> {
        let config = config.validated()?;
        tracing::debug!(
            seed = ?config.seed,
            sample_count = config.sample_count,
            "initialised variant generator"
        );
        let entropy = EntropySource::new(config.seed);
        Ok(Self { config, entropy })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Replace the supplied fields of the configuration.
    ///
    /// The merged configuration is validated before it is committed; on error the generator
    /// keeps its previous configuration. Randomness is not reset.
    pub fn update_parameters(&mut self, update: ConfigUpdate) -> Result<(), ConfigurationError> {
        let mut config = self.config.clone();
        config.apply(update);
        self.config = config.validated()?;
        Ok(())
    }

    /// Uniform residue position in `position_range`, inclusive.
    pub fn sample_position(&mut self) -> i64 {
        let (lo, hi) = self.config.position_range;
        self.entropy.discrete().gen_range(lo..=hi)
    }

    /// Uniform distance in `distance_range`, rounded to 2 decimals.
    pub fn sample_distance(&mut self) -> f64 {
        let (lo, hi) = self.config.distance_range;
        if lo == hi {
            return lo;
        }
        // bounds sit on the 0.01 grid, so rounding cannot leave the interval
        round_to(self.entropy.discrete().gen_range(lo..=hi), 2)
    }

    pub fn sample_secondary_structure(&mut self) -> String {
        let labels = &self.config.secondary_structure_labels;
        let index = self.entropy.discrete().gen_range(0..labels.len());
        labels[index].clone()
    }

    /// `{original}{position}{mutant}` with `mutant != original`.
    pub fn sample_variant_id(&mut self, position: i64) -> String {
        let alphabet = &self.config.amino_acid_alphabet;
        let rng = self.entropy.discrete();
        let original = rng.gen_range(0..alphabet.len());
        // draw from the alphabet with `original` removed
        let mut mutant = rng.gen_range(0..alphabet.len() - 1);
        if mutant >= original {
            mutant += 1;
        }
        format!("{}{}{}", alphabet[original], position, alphabet[mutant])
    }

    /// Two-branch folded normal mixture, rounded to 3 decimals.
    ///
    /// With probability `positive_fitness_probability` the value is `min(|v|, cap)` with
    /// `v ~ N(positive.mean, positive.std_dev)`, otherwise `max(-|v|, floor)` with
    /// `v ~ N(negative.mean, negative.std_dev)`.
    pub fn sample_log_fitness(&mut self) -> f64 {
        let p = self.config.positive_fitness_probability;
        if self.entropy.discrete().gen_bool(p) {
            let params = self.config.positive_fitness_params;
            let value = self.entropy.normal(params.mean, params.std_dev).abs();
            round_to(value.min(params.cap), 3)
        } else {
            let params = self.config.negative_fitness_params;
            let value = -self.entropy.normal(params.mean, params.std_dev).abs();
            round_to(value.max(params.floor), 3)
        }
    }

    pub fn generate_single_variant(&mut self) -> VariantRecord {
        let position = self.sample_position();
        VariantRecord {
            id: self.sample_variant_id(position),
            position,
            distance_to_active_site: self.sample_distance(),
            secondary_structure: self.sample_secondary_structure(),
            log_fitness: self.sample_log_fitness(),
        }
    }

    /// Generate `n` records, or `sample_count` when `n` is `None`.
    pub fn generate_table(&mut self, n: Option<usize>) -> VariantTable {
        let n = n.unwrap_or(self.config.sample_count);
        tracing::debug!(n, "generating variant table");
        (0..n).map(|_| self.generate_single_variant()).collect()
    }

    /// Lazily yields `sample_count` records.
    pub fn variants(&mut self) -> Variants<'_> {
        let remaining = self.config.sample_count;
        Variants {
            generator: self,
            remaining,
        }
    }
}

/// Iterator returned by [`VariantGenerator::variants`].
pub struct Variants<'a> {
    generator: &'a mut VariantGenerator,
    remaining: usize,
}

impl Iterator for Variants<'_> {
    type Item = VariantRecord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.generator.generate_single_variant())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Variants<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{NegativeFitness, PositiveFitness, PositiveFitnessUpdate};
    use crate::record::parse_variant_id;

    fn seeded(seed: u64) -> VariantGenerator {
        VariantGenerator::new(GeneratorConfig::builder().seed(seed).build()).unwrap()
    }

    fn is_two_decimal(value: f64) -> bool {
        round_to(value, 2) == value
    }

    fn is_three_decimal(value: f64) -> bool {
        round_to(value, 3) == value
    }

    #[test]
    fn test_table_has_requested_length() {
        let mut generator = seeded(1);
        assert_eq!(generator.generate_table(Some(37)).len(), 37);
        assert_eq!(generator.generate_table(Some(0)).len(), 0);
        assert_eq!(generator.generate_table(None).len(), 950);
    }

    #[test]
    fn test_records_respect_config() {
        let config = GeneratorConfig::builder()
            .seed(7)
            .amino_acid_alphabet(vec!['A', 'G', 'W'])
            .secondary_structure_labels(vec!["helix".into(), "strand".into()])
            .position_range((10, 20))
            .distance_range((2.0, 8.0))
            .build();
        let mut generator = VariantGenerator::new(config.clone()).unwrap();
        let table = generator.generate_table(Some(500));

        for record in &table {
            assert!((10..=20).contains(&record.position));
            assert!((2.0..=8.0).contains(&record.distance_to_active_site));
            assert!(is_two_decimal(record.distance_to_active_site));
            assert!(config
                .secondary_structure_labels
                .contains(&record.secondary_structure));

            let (original, position, mutant) = parse_variant_id(&record.id).unwrap();
            assert_ne!(original, mutant);
            assert!(config.amino_acid_alphabet.contains(&original));
            assert!(config.amino_acid_alphabet.contains(&mutant));
            assert_eq!(position, record.position);
        }
    }

    #[test]
    fn test_fitness_bounds_and_rounding() {
        let mut generator = seeded(11);
        let positive = PositiveFitness::default();
        let negative = NegativeFitness::default();
        let table = generator.generate_table(Some(2000));

        let mut saw_positive = false;
        let mut saw_negative = false;
        for value in table.log_fitness() {
            assert!(is_three_decimal(value), "{value} not rounded");
            if value > 0.0 {
                saw_positive = true;
                assert!(value <= positive.cap);
            } else if value < 0.0 {
                saw_negative = true;
                assert!(value >= negative.floor);
            }
        }
        assert!(saw_positive && saw_negative);
    }

    #[test]
    fn test_branch_probability_extremes() {
        let config = GeneratorConfig::builder()
            .seed(3)
            .positive_fitness_probability(1.0)
            .build();
        let mut generator = VariantGenerator::new(config).unwrap();
        assert!((0..200).all(|_| generator.sample_log_fitness() >= 0.0));

        let config = GeneratorConfig::builder()
            .seed(3)
            .positive_fitness_probability(0.0)
            .build();
        let mut generator = VariantGenerator::new(config).unwrap();
        assert!((0..200).all(|_| generator.sample_log_fitness() <= 0.0));
    }

    #[test]
    fn test_tight_cap_and_floor_clamp() {
        let config = GeneratorConfig::builder()
            .seed(5)
            .positive_fitness_params(PositiveFitness {
                mean: 10.0,
                std_dev: 0.5,
                cap: 2.0,
            })
            .negative_fitness_params(NegativeFitness {
                mean: 10.0,
                std_dev: 0.5,
                floor: -1.5,
            })
            .build();
        let mut generator = VariantGenerator::new(config).unwrap();
        for _ in 0..100 {
            let value = generator.sample_log_fitness();
            assert!(value == 2.0 || value == -1.5, "unexpected {value}");
        }
    }

    #[test]
    fn test_degenerate_ranges_are_constant() {
        let config = GeneratorConfig::builder()
            .seed(9)
            .position_range((42, 42))
            .distance_range((3.25, 3.25))
            .secondary_structure_labels(vec!["coil".into()])
            .build();
        let mut generator = VariantGenerator::new(config).unwrap();
        for record in generator.generate_table(Some(20)) {
            assert_eq!(record.position, 42);
            assert_eq!(record.distance_to_active_site, 3.25);
            assert_eq!(record.secondary_structure, "coil");
        }
    }

    #[test]
    fn test_two_letter_alphabet_always_swaps() {
        let config = GeneratorConfig::builder()
            .seed(2)
            .amino_acid_alphabet(vec!['A', 'G'])
            .build();
        let mut generator = VariantGenerator::new(config).unwrap();
        for _ in 0..50 {
            let id = generator.sample_variant_id(17);
            assert!(id == "A17G" || id == "G17A", "unexpected {id}");
        }
    }

    #[test]
    fn test_same_seed_same_table() {
        let config = GeneratorConfig::builder()
            .sample_count(5)
            .seed(42)
            .position_range((1, 10))
            .build();
        let first = VariantGenerator::new(config.clone())
            .unwrap()
            .generate_table(None);
        let second = VariantGenerator::new(config)
            .unwrap()
            .generate_table(None);
        assert_eq!(first.len(), 5);
        assert_eq!(first, second);
    }

    #[test]
    fn test_seed_42_table_is_pinned() {
        let config = GeneratorConfig::builder()
            .sample_count(5)
            .seed(42)
            .position_range((1, 10))
            .build();
        let table = VariantGenerator::new(config).unwrap().generate_table(None);
        let rows: Vec<_> = table
            .iter()
            .map(|r| {
                (
                    r.id.as_str(),
                    r.position,
                    r.distance_to_active_site,
                    r.secondary_structure.as_str(),
                    r.log_fitness,
                )
            })
            .collect();
        assert_eq!(
            rows,
            vec![
                ("K10G", 10, 3.85, "beta", -4.238),
                ("M3W", 3, 19.18, "turn", 0.107),
                ("H2R", 2, 2.49, "alpha", 0.951),
                ("S9F", 9, 15.54, "coil", -6.824),
                ("S7Q", 7, 9.61, "loop", -0.003),
            ]
        );
    }

    #[test]
    fn test_different_or_missing_seeds_differ() {
        let a = seeded(1).generate_table(Some(10));
        let b = seeded(2).generate_table(Some(10));
        assert_ne!(a, b);

        let mut c = VariantGenerator::new(GeneratorConfig::default()).unwrap();
        let mut d = VariantGenerator::new(GeneratorConfig::default()).unwrap();
        assert_ne!(c.generate_table(Some(10)), d.generate_table(Some(10)));
    }

    #[test]
    fn test_sample_count_update_keeps_stream() {
        let mut updated = seeded(42);
        let mut untouched = seeded(42);
        updated
            .update_parameters(ConfigUpdate::builder().sample_count(3).build())
            .unwrap();
        assert_eq!(updated.config().sample_count, 3);
        assert_eq!(
            updated.generate_table(Some(25)),
            untouched.generate_table(Some(25))
        );
        assert_eq!(updated.generate_table(None).len(), 3);
    }

    #[test]
    fn test_update_applies_immediately() {
        let mut generator = seeded(8);
        generator.generate_table(Some(5));
        generator
            .update_parameters(
                ConfigUpdate::builder()
                    .position_range((900, 910))
                    .positive_fitness_probability(1.0)
                    .positive_fitness_params(PositiveFitnessUpdate::builder().cap(0.5).build())
                    .build(),
            )
            .unwrap();
        for record in generator.generate_table(Some(50)) {
            assert!((900..=910).contains(&record.position));
            assert!((0.0..=0.5).contains(&record.log_fitness));
        }
    }

    #[test]
    fn test_invalid_update_keeps_previous_config() {
        let mut generator = seeded(8);
        let before = generator.config().clone();
        let err = generator
            .update_parameters(
                ConfigUpdate::builder()
                    .sample_count(10)
                    .distance_range((9.0, 1.0))
                    .build(),
            )
            .unwrap_err();
        assert!(matches!(err, ConfigurationError::InvalidDistanceRange { .. }));
        assert_eq!(generator.config(), &before);
    }

    #[test]
    fn test_construction_rejects_invalid_config() {
        let config = GeneratorConfig::builder()
            .amino_acid_alphabet(vec!['A'])
            .build();
        assert!(matches!(
            VariantGenerator::new(config),
            Err(ConfigurationError::AlphabetTooSmall { .. })
        ));
    }

    #[test]
    fn test_variants_iterator() {
        let config = GeneratorConfig::builder().seed(4).sample_count(6).build();
        let mut lazy = VariantGenerator::new(config.clone()).unwrap();
        let mut eager = VariantGenerator::new(config).unwrap();
        let iter = lazy.variants();
        assert_eq!(iter.len(), 6);
        let records: Vec<_> = iter.collect();
        assert_eq!(records, eager.generate_table(None).into_records());
    }
}
