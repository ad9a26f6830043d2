//! Seeded random move selection.
//!
//! Every random choice in a match goes through one `GameRng`, so a match is
//! replayed exactly by its seed and the moves its providers return.
//!
//! ```
//! use amazons::core::GameRng;
//!
//! let moves = ["d1-d4/d1", "g1-g4/g1", "a4-a2/a1"];
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.choose(&moves), b.choose(&moves));
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// ChaCha8 stream used by the engine's random fallback and `RandomPlayer`.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Pick one element uniformly, or `None` from an empty slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draws(rng: &mut GameRng, n: usize) -> Vec<u32> {
        let pool: Vec<u32> = (0..1000).collect();
        (0..n).filter_map(|_| rng.choose(&pool).copied()).collect()
    }

    #[test]
    fn test_same_seed_same_draws() {
        assert_eq!(draws(&mut GameRng::new(42), 50), draws(&mut GameRng::new(42), 50));
    }

    #[test]
    fn test_different_seeds_diverge() {
        assert_ne!(draws(&mut GameRng::new(1), 10), draws(&mut GameRng::new(2), 10));
    }

    #[test]
    fn test_choose() {
        let mut rng = GameRng::new(42);
        let items = [1, 2, 3, 4, 5];

        let chosen = rng.choose(&items);
        assert!(chosen.is_some_and(|item| items.contains(item)));

        let empty: [i32; 0] = [];
        assert!(rng.choose(&empty).is_none());
    }
}
