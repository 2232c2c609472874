//! Instance-owned randomness.
//!
//! Each generator holds two ChaCha8 streams: one for categorical and uniform draws, one for
//! normal draws. With a seed both come from that seed (on different ChaCha streams), so
//! output is identical across runs and platforms.
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::StandardNormal;

const CONTINUOUS_STREAM: u64 = 1;

pub(crate) struct EntropySource {
    discrete: ChaCha8Rng,
    continuous: ChaCha8Rng,
}

impl EntropySource {
    pub(crate) fn new(seed: Option<u64>) -> Self {
        let (discrete, mut continuous) = match seed {
            Some(seed) => (
                ChaCha8Rng::seed_from_u64(seed),
                ChaCha8Rng::seed_from_u64(seed),
            ),
            None => (ChaCha8Rng::from_entropy(), ChaCha8Rng::from_entropy()),
        };
        continuous.set_stream(CONTINUOUS_STREAM);
        Self {
            discrete,
            continuous,
        }
    }

    /// Source for positions, distances, residue and label choices, branch selection.
    pub(crate) fn discrete(&mut self) -> &mut ChaCha8Rng {
        &mut self.discrete
    }

    pub(crate) fn normal(&mut self, mean: f64, std_dev: f64) -> f64 {
        let z: f64 = self.continuous.sample(StandardNormal);
        mean + std_dev * z
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_sources_repeat() {
        let mut a = EntropySource::new(Some(42));
        let mut b = EntropySource::new(Some(42));
        for _ in 0..16 {
            assert_eq!(a.discrete().gen::<u64>(), b.discrete().gen::<u64>());
            assert_eq!(a.normal(0.0, 1.0), b.normal(0.0, 1.0));
        }
    }

    #[test]
    fn test_streams_are_independent() {
        let mut source = EntropySource::new(Some(42));
        let discrete: Vec<u64> = (0..8).map(|_| source.discrete.gen()).collect();
        let continuous: Vec<u64> = (0..8).map(|_| source.continuous.gen()).collect();
        assert_ne!(discrete, continuous);
    }
}
