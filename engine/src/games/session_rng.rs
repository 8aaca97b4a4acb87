use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of randomness for the computer opponent.
///
/// `roll` yields a value in `[0, 1)` and `pick` an index in `0..len`.
pub trait BotRandom {
    fn roll(&mut self) -> f64;
    fn pick(&mut self, len: usize) -> usize;
}

#[derive(Debug, Clone)]
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Derives an independent generator, advancing this one by a single draw.
    pub fn fork(&mut self) -> SessionRng {
        let seed: u64 = self.rng.random();
        SessionRng::new(seed)
    }
}

impl BotRandom for SessionRng {
    fn roll(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    fn pick(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = SessionRng::new(7);
        let mut b = SessionRng::new(7);
        for _ in 0..16 {
            assert_eq!(a.pick(9), b.pick(9));
        }
    }

    #[test]
    fn test_fork_is_deterministic() {
        let mut a = SessionRng::new(99);
        let mut b = SessionRng::new(99);
        assert_eq!(a.fork().seed(), b.fork().seed());
        assert_eq!(a.fork().seed(), b.fork().seed());
    }

    #[test]
    fn test_roll_in_unit_interval() {
        let mut rng = SessionRng::new(1);
        for _ in 0..100 {
            let r = rng.roll();
            assert!((0.0..1.0).contains(&r));
        }
    }
}
