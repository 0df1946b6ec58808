use rand::prelude::*;
use rand::rngs::StdRng;

use super::*;

/// Uniform choice among the empty cells.
#[derive(Clone, Debug)]
pub struct RandomPointGenerator<R = StdRng> {
    rng: R,
}

impl<R: Rng> RandomPointGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomPointGenerator<StdRng> {
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Seeds from the config, or draws a fresh seed when the config has none.
    pub fn from_config(config: &GameConfig) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        log::debug!("Seeding point generator with {}", seed);
        Self::from_seed(seed)
    }
}

impl<R: Rng> PointGenerator for RandomPointGenerator<R> {
    fn choose(&mut self, candidates: &[Coord2]) -> Option<Coord2> {
        if candidates.is_empty() {
            return None;
        }
        let index = self.rng.random_range(0..candidates.len());
        candidates.get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANDIDATES: [Coord2; 4] = [(0, 0), (0, 2), (1, 1), (2, 0)];

    #[test]
    fn same_seed_same_choices() {
        let mut a = RandomPointGenerator::from_seed(7);
        let mut b = RandomPointGenerator::from_seed(7);

        for _ in 0..32 {
            assert_eq!(a.choose(&CANDIDATES), b.choose(&CANDIDATES));
        }
    }

    #[test]
    fn only_returns_candidates() {
        let mut generator = RandomPointGenerator::from_seed(3);

        for _ in 0..64 {
            let picked = generator.choose(&CANDIDATES).unwrap();
            assert!(CANDIDATES.contains(&picked));
        }
        assert_eq!(generator.choose(&[]), None);
    }

    #[test]
    fn every_candidate_gets_picked_eventually() {
        let mut generator = RandomPointGenerator::from_seed(11);
        let mut seen = [false; CANDIDATES.len()];

        for _ in 0..256 {
            let picked = generator.choose(&CANDIDATES).unwrap();
            let index = CANDIDATES.iter().position(|&c| c == picked).unwrap();
            seen[index] = true;
        }

        assert!(seen.iter().all(|&hit| hit));
    }
}
