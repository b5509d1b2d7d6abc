use rand::{rngs::OsRng, seq::SliceRandom, Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

/// Seedable source of random test input.
///
/// Uses the xoshiro256** PRNG, so a recorded [`seed`](Fuzzer::seed) replays
/// the exact same sequence.
///
/// # Examples
///
/// ```
/// use avl_forest_util::Fuzzer;
///
/// let mut fuzzer = Fuzzer::new(Some([7; 32]));
/// let n = fuzzer.random_int(1, 10);
/// assert!((1..=10).contains(&n));
///
/// let mut keys: Vec<i32> = (0..8).collect();
/// fuzzer.shuffle(&mut keys);
/// keys.sort();
/// assert_eq!(keys, (0..8).collect::<Vec<_>>());
/// ```
pub struct Fuzzer {
    /// The seed used to initialize the PRNG.
    pub seed: [u8; 32],
    rng: Xoshiro256StarStar,
}

impl Fuzzer {
    /// Creates a fuzzer; without a seed one is drawn from `OsRng`.
    pub fn new(seed: Option<[u8; 32]>) -> Self {
        let seed = seed.unwrap_or_else(|| {
            let mut bytes = [0u8; 32];
            OsRng.fill_bytes(&mut bytes);
            bytes
        });
        log::debug!("fuzzer seed {seed:?}");
        Self {
            seed,
            rng: Xoshiro256StarStar::from_seed(seed),
        }
    }

    /// Seed built from a single integer, handy for test tables.
    pub fn from_u64(seed: u64) -> Self {
        let mut bytes = [0u8; 32];
        for chunk in bytes.chunks_mut(8) {
            chunk.copy_from_slice(&seed.to_le_bytes());
        }
        Self::new(Some(bytes))
    }

    /// Integer in `[min, max]`.
    pub fn random_int(&mut self, min: i32, max: i32) -> i32 {
        self.rng.gen_range(min..=max)
    }

    pub fn random_bool(&mut self, probability: f64) -> bool {
        self.rng.gen_bool(probability)
    }

    pub fn pick<'a, T>(&mut self, elements: &'a [T]) -> &'a T {
        let idx = self.rng.gen_range(0..elements.len());
        &elements[idx]
    }

    pub fn shuffle<T>(&mut self, elements: &mut [T]) {
        elements.shuffle(&mut self.rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_int_stays_in_range() {
        let mut fuzzer = Fuzzer::new(None);
        for _ in 0..100 {
            let n = fuzzer.random_int(-5, 5);
            assert!((-5..=5).contains(&n));
        }
    }

    #[test]
    fn pick_returns_member() {
        let mut fuzzer = Fuzzer::new(None);
        let choices = ['a', 'b', 'c'];
        for _ in 0..100 {
            assert!(choices.contains(fuzzer.pick(&choices)));
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = Fuzzer::from_u64(42);
        let mut b = Fuzzer::from_u64(42);
        for _ in 0..10 {
            assert_eq!(a.random_int(0, 1000), b.random_int(0, 1000));
        }

        let mut xs: Vec<u32> = (0..20).collect();
        let mut ys = xs.clone();
        a.shuffle(&mut xs);
        b.shuffle(&mut ys);
        assert_eq!(xs, ys);
    }
}
