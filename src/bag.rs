//! 7-bag randomizer for piece generation
//!
//! All 7 pieces are shuffled, then dealt out before reshuffling. This
//! prevents long droughts. The random source is injected so sessions can
//! be replayed from a seed.

use crate::tetromino::TetrominoType;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// The 7-bag piece randomizer
#[derive(Debug, Clone)]
pub struct Bag<R = ChaCha8Rng> {
    /// Pieces left in the current bag, drawn from the end
    pieces: Vec<TetrominoType>,
    rng: R,
}

impl Bag<ChaCha8Rng> {
    /// Create a bag seeded from OS entropy
    pub fn new() -> Self {
        Self::with_rng(ChaCha8Rng::from_entropy())
    }

    /// Create a reproducible bag
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl Default for Bag<ChaCha8Rng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Bag<R> {
    /// Create a bag drawing from any random source
    pub fn with_rng(rng: R) -> Self {
        Self {
            pieces: Vec::with_capacity(7),
            rng,
        }
    }

    /// Draw the next piece, refilling and reshuffling when the bag is empty
    pub fn next(&mut self) -> TetrominoType {
        if self.pieces.is_empty() {
            self.refill();
        }
        match self.pieces.pop() {
            Some(piece) => piece,
            None => unreachable!("bag was just refilled"),
        }
    }

    /// Number of pieces left before the next reshuffle
    pub fn remaining(&self) -> usize {
        self.pieces.len()
    }

    /// Refill with one of each piece; `shuffle` is a Fisher-Yates pass
    fn refill(&mut self) {
        self.pieces.extend(TetrominoType::all());
        self.pieces.shuffle(&mut self.rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, HashSet};

    #[test]
    fn test_bag_contains_all_pieces() {
        let mut bag = Bag::with_seed(7);
        let pieces: HashSet<_> = (0..7).map(|_| bag.next()).collect();
        assert_eq!(pieces.len(), 7);
    }

    #[test]
    fn test_fourteen_draws_hold_each_piece_twice() {
        let mut bag = Bag::with_seed(42);
        let mut counts = HashMap::new();
        for _ in 0..14 {
            *counts.entry(bag.next()).or_insert(0) += 1;
        }
        assert_eq!(counts.len(), 7);
        assert!(counts.values().all(|&n| n == 2));
    }

    #[test]
    fn test_no_piece_three_times_in_any_window_of_seven() {
        let mut bag = Bag::with_seed(1234);
        let draws: Vec<_> = (0..700).map(|_| bag.next()).collect();
        for window in draws.windows(7) {
            for kind in TetrominoType::all() {
                let n = window.iter().filter(|&&p| p == kind).count();
                assert!(n <= 2, "{kind:?} appeared {n} times in {window:?}");
            }
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = Bag::with_seed(99);
        let mut b = Bag::with_seed(99);
        for _ in 0..50 {
            assert_eq!(a.next(), b.next());
        }
    }

    #[test]
    fn test_remaining_counts_down() {
        let mut bag = Bag::with_seed(3);
        assert_eq!(bag.remaining(), 0);
        bag.next();
        assert_eq!(bag.remaining(), 6);
        for _ in 0..6 {
            bag.next();
        }
        assert_eq!(bag.remaining(), 0);
        bag.next();
        assert_eq!(bag.remaining(), 6);
    }
}
