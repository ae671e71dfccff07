use crate::cards::{Card, CardSupply};
use crate::shuffler::Shuffler;
use std::collections::VecDeque;
use std::fmt;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("no cards left to draw: wanted {wanted}, {left} left")]
    OutOfCards { wanted: usize, left: usize },
}

/// The working card sequence for one hand.
///
/// Draws take from the front and never put cards back; only `shuffle`
/// restores the full supply.
///
/// ```
/// use holdem_table::cards::CardSupply;
/// use holdem_table::deck::Deck;
/// use holdem_table::shuffler::OrderedShuffler;
///
/// let mut deck = Deck::new(CardSupply::standard(), Box::new(OrderedShuffler));
/// deck.shuffle();
/// let flop = deck.draw_community_cards(3).unwrap();
/// assert_eq!(flop.len(), 3);
/// assert_eq!(deck.len(), 49);
/// ```
pub struct Deck {
    supply: CardSupply,
    cards: VecDeque<Card>,
    shuffler: Box<dyn Shuffler>,
}

impl fmt::Debug for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deck").field("left", &self.cards.len()).finish_non_exhaustive()
    }
}

impl Deck {
    /// A deck holding the supply in supply order. Call `shuffle` before dealing.
    pub fn new(supply: CardSupply, shuffler: Box<dyn Shuffler>) -> Self {
        let cards = supply.cards().iter().copied().collect();
        Self { supply, cards, shuffler }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Replace the working sequence with a fresh permutation of the whole supply.
    pub fn shuffle(&mut self) {
        self.cards = self.shuffler.shuffle(self.supply.cards()).into();
        tracing::debug!(cards = self.cards.len(), "deck shuffled");
    }

    /// Remove and return the first card.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        self.cards.pop_front().ok_or(DeckError::OutOfCards { wanted: 1, left: 0 })
    }

    /// Draw `n` cards in order. Takes nothing if fewer than `n` remain.
    pub fn draw_community_cards(&mut self, n: usize) -> Result<Vec<Card>, DeckError> {
        if self.cards.len() < n {
            return Err(DeckError::OutOfCards { wanted: n, left: self.cards.len() });
        }
        Ok(self.cards.drain(..n).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};
    use crate::shuffler::{OrderedShuffler, SeededShuffler};
    use std::collections::HashSet;

    fn ordered() -> Deck {
        let mut d = Deck::new(CardSupply::standard(), Box::new(OrderedShuffler));
        d.shuffle();
        d
    }

    #[test]
    fn draws_from_the_front_in_order() {
        let mut d = ordered();
        assert_eq!(d.draw().unwrap(), Card::new(Rank::Two, Suit::Clubs));
        assert_eq!(d.draw().unwrap(), Card::new(Rank::Three, Suit::Clubs));
        assert_eq!(
            d.draw_community_cards(3).unwrap(),
            vec![
                Card::new(Rank::Four, Suit::Clubs),
                Card::new(Rank::Five, Suit::Clubs),
                Card::new(Rank::Six, Suit::Clubs),
            ]
        );
        assert_eq!(d.len(), 47);
    }

    #[test]
    fn draws_without_replacement_until_empty() {
        let mut d = Deck::new(CardSupply::standard(), Box::new(SeededShuffler::new(7)));
        d.shuffle();
        let mut seen = HashSet::new();
        while let Ok(c) = d.draw() {
            assert!(seen.insert(c), "card {c} drawn twice");
        }
        assert_eq!(seen.len(), 52);
        assert!(d.is_empty());
        assert_eq!(d.draw(), Err(DeckError::OutOfCards { wanted: 1, left: 0 }));
    }

    #[test]
    fn short_community_draw_takes_nothing() {
        let mut d = ordered();
        d.draw_community_cards(50).unwrap();
        let err = d.draw_community_cards(3).unwrap_err();
        assert_eq!(err, DeckError::OutOfCards { wanted: 3, left: 2 });
        assert_eq!(d.len(), 2);
    }

    #[test]
    fn shuffle_restores_the_full_supply() {
        let mut d = ordered();
        d.draw_community_cards(10).unwrap();
        d.shuffle();
        assert_eq!(d.len(), 52);
        assert_eq!(d.draw().unwrap(), Card::new(Rank::Two, Suit::Clubs));
    }
}
