use crate::cards::Card;

/// One seat at the table.
///
/// Fields are only changed by the engine; everything outside the crate reads
/// through the accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Player {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) cash: u64,
    pub(crate) hand: Vec<Card>,
    pub(crate) active: bool,
    pub(crate) checked: bool,
    pub(crate) raised: bool,
    /// Chips moved into the pot by this player during the hand.
    pub(crate) bet: u64,
}

impl Player {
    /// A seated player with no cards who is not yet in a hand.
    pub fn new(id: impl Into<String>, name: impl Into<String>, cash: u64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            cash,
            hand: Vec::new(),
            active: false,
            checked: false,
            raised: false,
            bet: 0,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's remaining cash
    pub fn cash(&self) -> u64 {
        self.cash
    }

    /// Returns the player's hand cards (empty before the deal)
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Still in the hand (dealt in and not folded)
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Passed during the current betting round
    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Raised at least once this hand
    pub fn has_raised(&self) -> bool {
        self.raised
    }

    pub fn bet(&self) -> u64 {
        self.bet
    }

    /// Move `amount` from cash into this player's committed bet.
    /// Callers validate `amount <= cash` first.
    pub(crate) fn place_bet(&mut self, amount: u64) {
        debug_assert!(amount <= self.cash);
        self.cash -= amount;
        self.bet += amount;
    }

    pub(crate) fn add_cash(&mut self, amount: u64) {
        self.cash += amount;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_player_is_seated_but_not_in_hand() {
        let p = Player::new("al-capone", "Al Capone", 100);
        assert_eq!(p.id(), "al-capone");
        assert_eq!(p.cash(), 100);
        assert!(p.hand().is_empty());
        assert!(!p.is_active());
        assert!(!p.is_checked());
        assert!(!p.has_raised());
        assert_eq!(p.bet(), 0);
    }

    #[test]
    fn placing_bets_accumulates() {
        let mut p = Player::new("a", "A", 100);
        p.place_bet(10);
        p.place_bet(20);
        assert_eq!(p.cash(), 70);
        assert_eq!(p.bet(), 30);
        p.add_cash(5);
        assert_eq!(p.cash(), 75);
    }
}
