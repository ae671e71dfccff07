//! Card shuffling strategies.
//!
//! A `Shuffler` turns the card supply into one permutation for a fresh deck.
//! The default draws from the thread RNG; tests substitute a seeded or
//! order-preserving implementation to get reproducible hands.

use crate::cards::Card;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Reorders a sequence of cards. Output must be a permutation of the input.
pub trait Shuffler: Send + Sync {
    fn shuffle(&mut self, cards: &[Card]) -> Vec<Card>;
}

/// Uniformly random permutation (Fisher-Yates over the thread RNG).
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomShuffler;

impl Shuffler for RandomShuffler {
    fn shuffle(&mut self, cards: &[Card]) -> Vec<Card> {
        let mut out = cards.to_vec();
        out.shuffle(&mut rand::rng());
        out
    }
}

/// Reproducible permutations from a ChaCha8 stream.
///
/// Two shufflers built from the same seed produce the same sequence of
/// permutations.
#[derive(Debug, Clone)]
pub struct SeededShuffler {
    rng: ChaCha8Rng,
}

impl SeededShuffler {
    pub fn new(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed) }
    }
}

impl Shuffler for SeededShuffler {
    fn shuffle(&mut self, cards: &[Card]) -> Vec<Card> {
        let mut out = cards.to_vec();
        out.shuffle(&mut self.rng);
        out
    }
}

/// Identity permutation: the deck is dealt in supply order.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderedShuffler;

impl Shuffler for OrderedShuffler {
    fn shuffle(&mut self, cards: &[Card]) -> Vec<Card> {
        cards.to_vec()
    }
}
