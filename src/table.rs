use crate::action::Action;
use crate::cards::{Card, CardSupply};
use crate::config::TableConfig;
use crate::deck::{Deck, DeckError};
use crate::player::Player;
use crate::shuffler::{RandomShuffler, Shuffler};
use std::collections::HashMap;

/// Where the hand is. Moves strictly forward, one step at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    Open,
    PreFlop,
    Flop,
    Turn,
    River,
    Ended,
}

impl GameState {
    pub fn label(self) -> &'static str {
        match self {
            GameState::Open => "open",
            GameState::PreFlop => "pre-flop",
            GameState::Flop => "flop",
            GameState::Turn => "turn",
            GameState::River => "river",
            GameState::Ended => "ended",
        }
    }

    /// Community cards on the board in this state.
    pub fn community_card_count(self) -> usize {
        match self {
            GameState::Open | GameState::PreFlop => 0,
            GameState::Flop => 3,
            GameState::Turn => 4,
            GameState::River | GameState::Ended => 5,
        }
    }

    /// Betting rounds accept actions; the open table and a finished hand do not.
    pub fn in_hand(self) -> bool {
        !matches!(self, GameState::Open | GameState::Ended)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TableError {
    #[error("illegal action: {0}")]
    IllegalAction(String),
    #[error("illegal amount: {0}")]
    IllegalAmount(String),
    #[error(transparent)]
    OutOfCards(#[from] DeckError),
    #[error("player already seated: {0}")]
    DuplicatePlayer(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum HistoryVerb {
    Check,
    Raise,
    Call,
    Fold,
    Win,
}

impl HistoryVerb {
    pub fn label(self) -> &'static str {
        match self {
            HistoryVerb::Check => "Check",
            HistoryVerb::Raise => "Raise",
            HistoryVerb::Call => "Call",
            HistoryVerb::Fold => "Fold",
            HistoryVerb::Win => "Win",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct HistoryEntry {
    pub player_id: String,
    pub verb: HistoryVerb,
    pub amount: Option<u64>,
    pub state: GameState,
}

/// One table running a single hand.
///
/// ```
/// use holdem_table::config::TableConfig;
/// use holdem_table::shuffler::OrderedShuffler;
/// use holdem_table::table::{GameState, Table};
///
/// let mut table = Table::with_shuffler(TableConfig::default(), OrderedShuffler);
/// table.add_player("al-capone", "Al Capone").unwrap();
/// table.add_player("alice", "Alice").unwrap();
/// table.start().unwrap();
///
/// table.perform_action("check", 0).unwrap();
/// table.perform_action("check", 0).unwrap();
/// assert_eq!(table.state(), GameState::Flop);
/// assert_eq!(table.community_cards().len(), 3);
/// ```
#[derive(Debug)]
pub struct Table {
    config: TableConfig,
    deck: Deck,
    state: GameState,
    players: Vec<Player>,
    current: Option<usize>,
    pot: u64,
    community_cards: Vec<Card>,
    /// Recorded commitment per player id: a raise overwrites, a call adds.
    bets: HashMap<String, u64>,
    winner: Option<usize>,
    winner_hand: Vec<Card>,
    round_is_complete: bool,
    history: Vec<HistoryEntry>,
}

impl Table {
    /// A table that shuffles uniformly at random.
    pub fn new(config: TableConfig) -> Self {
        Self::with_shuffler(config, RandomShuffler)
    }

    pub fn with_shuffler<S: Shuffler + 'static>(config: TableConfig, shuffler: S) -> Self {
        Self {
            config,
            deck: Deck::new(CardSupply::standard(), Box::new(shuffler)),
            state: GameState::Open,
            players: Vec::new(),
            current: None,
            pot: 0,
            community_cards: Vec::new(),
            bets: HashMap::new(),
            winner: None,
            winner_hand: Vec::new(),
            round_is_complete: false,
            history: Vec::new(),
        }
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Players in seating order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// The player whose turn it is; `None` until the hand starts.
    pub fn current_player(&self) -> Option<&Player> {
        self.current.map(|i| &self.players[i])
    }

    pub fn current_seat(&self) -> Option<usize> {
        self.current
    }

    pub fn pot(&self) -> u64 {
        self.pot
    }

    pub fn community_cards(&self) -> &[Card] {
        &self.community_cards
    }

    pub fn bets(&self) -> &HashMap<String, u64> {
        &self.bets
    }

    pub fn winner(&self) -> Option<&Player> {
        self.winner.map(|i| &self.players[i])
    }

    pub fn winner_seat(&self) -> Option<usize> {
        self.winner
    }

    pub fn winner_hand(&self) -> &[Card] {
        &self.winner_hand
    }

    /// True only right after an action that closed a betting round.
    pub fn round_is_complete(&self) -> bool {
        self.round_is_complete
    }

    /// The named player's hand; empty for unknown players or before the deal.
    pub fn player_cards(&self, id: &str) -> &[Card] {
        self.player(id).map(|p| p.hand()).unwrap_or(&[])
    }

    /// Largest amount any seated player has committed this hand.
    pub fn highest_bet(&self) -> u64 {
        self.players.iter().map(|p| p.bet).max().unwrap_or(0)
    }

    fn lowest_bet(&self) -> u64 {
        self.players.iter().map(|p| p.bet).min().unwrap_or(0)
    }

    /// Chips the current player must add to match the highest bet.
    pub fn call_amount(&self) -> u64 {
        self.current.map(|seat| self.call_amount_for(seat)).unwrap_or(0)
    }

    fn call_amount_for(&self, seat: usize) -> u64 {
        self.highest_bet().saturating_sub(self.recorded_bet(seat))
    }

    fn recorded_bet(&self, seat: usize) -> u64 {
        self.bets.get(&self.players[seat].id).copied().unwrap_or(0)
    }

    pub fn history_recent(&self, n: usize) -> &[HistoryEntry] {
        let start = self.history.len().saturating_sub(n);
        &self.history[start..]
    }

    /// Up to `n` entries ending `offset` entries before the most recent one.
    pub fn history_recent_offset(&self, n: usize, offset: usize) -> &[HistoryEntry] {
        let end = self.history.len().saturating_sub(offset);
        let start = end.saturating_sub(n);
        &self.history[start..end]
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Seat a new player with the configured starting cash.
    pub fn add_player(
        &mut self,
        id: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<(), TableError> {
        let id = id.into();
        if self.state != GameState::Open {
            return Err(TableError::IllegalAction(format!(
                "cannot join during {}, the table is not open",
                self.state.label()
            )));
        }
        if self.bets.contains_key(&id) {
            return Err(TableError::DuplicatePlayer(id));
        }
        // the pot can then never exceed the chips in play
        let in_play = self.players.iter().map(|p| p.cash).sum::<u64>();
        if in_play.checked_add(self.config.starting_cash).is_none() {
            return Err(TableError::IllegalAmount(format!(
                "starting cash of {} would overflow the chips in play",
                self.config.starting_cash
            )));
        }
        let player = Player::new(id.clone(), name, self.config.starting_cash);
        tracing::info!(
            player = %id,
            name = player.name(),
            seat = self.players.len(),
            "player joined"
        );
        self.players.push(player);
        self.bets.insert(id, 0);
        Ok(())
    }

    /// Shuffle, deal two cards to every player and hand the turn to the first seat.
    ///
    /// Does nothing while too few players are seated or once the hand has started.
    pub fn start(&mut self) -> Result<(), TableError> {
        if self.state != GameState::Open {
            tracing::debug!(state = self.state.label(), "start ignored, hand already started");
            return Ok(());
        }
        if self.players.len() < self.config.min_players {
            tracing::debug!(
                players = self.players.len(),
                required = self.config.min_players,
                "start ignored, not enough players"
            );
            return Ok(());
        }

        self.deck.shuffle();
        // hole cards plus a full board must be available before anything is dealt
        let needed = self.players.len() * 2 + GameState::River.community_card_count();
        if self.deck.len() < needed {
            return Err(DeckError::OutOfCards { wanted: needed, left: self.deck.len() }.into());
        }
        let mut hands = Vec::with_capacity(self.players.len());
        for _ in 0..self.players.len() {
            hands.push(vec![self.deck.draw()?, self.deck.draw()?]);
        }

        self.state = GameState::PreFlop;
        for (p, hand) in self.players.iter_mut().zip(hands) {
            p.hand = hand;
            p.active = true;
        }
        self.advance_turn();
        tracing::info!(players = self.players.len(), "hand started");
        Ok(())
    }

    /// Apply an action given by name, e.g. `("raise", 20)`.
    pub fn perform_action(&mut self, action: &str, amount: u64) -> Result<(), TableError> {
        let action = Action::parse(action, amount)?;
        self.apply(action)
    }

    /// Apply `action` for the current player, then close the round if it reached consensus.
    ///
    /// On error nothing about the table has changed.
    pub fn apply(&mut self, action: Action) -> Result<(), TableError> {
        let seat = self.acting_seat()?;
        tracing::debug!(
            player = %self.players[seat].id,
            %action,
            state = self.state.label(),
            "applying action"
        );
        let applied = match action {
            Action::Check => self.check(seat),
            Action::Raise(amount) => self.raise(seat, amount),
            Action::Call => self.call(seat),
            Action::Fold => {
                self.fold(seat);
                Ok(())
            }
        };
        if let Err(err) = applied {
            tracing::debug!(player = %self.players[seat].id, %err, "action rejected");
            return Err(err);
        }
        self.complete_round(action)
    }

    fn acting_seat(&self) -> Result<usize, TableError> {
        if !self.state.in_hand() {
            return Err(TableError::IllegalAction(format!(
                "no hand in progress (state: {})",
                self.state.label()
            )));
        }
        self.current.ok_or_else(|| TableError::IllegalAction("no current player".into()))
    }

    fn check(&mut self, seat: usize) -> Result<(), TableError> {
        let owed = self.call_amount_for(seat);
        if owed > 0 {
            return Err(TableError::IllegalAction(format!(
                "cannot check, outstanding bet amount of {owed}"
            )));
        }
        self.players[seat].checked = true;
        self.record(seat, HistoryVerb::Check, None);
        self.advance_turn();
        Ok(())
    }

    fn raise(&mut self, seat: usize, amount: u64) -> Result<(), TableError> {
        let cash = self.players[seat].cash;
        if amount > cash {
            return Err(TableError::IllegalAmount(format!(
                "raise of {amount} is more than the player's cash of {cash}"
            )));
        }
        let call_amount = self.call_amount_for(seat);
        if amount <= call_amount {
            return Err(TableError::IllegalAmount(format!(
                "raise must be greater than {call_amount}"
            )));
        }
        // every seat has to be able to match it
        if let Some(short) = self.players.iter().find(|p| p.cash < amount) {
            return Err(TableError::IllegalAmount(format!(
                "raise of {amount} is more than {}'s remaining cash of {}",
                short.id, short.cash
            )));
        }

        self.players[seat].place_bet(amount);
        self.players[seat].raised = true;
        // bounded by the chips in play, see add_player
        self.pot += amount;
        self.bets.insert(self.players[seat].id.clone(), amount);
        self.record(seat, HistoryVerb::Raise, Some(amount));
        self.advance_turn();
        Ok(())
    }

    fn call(&mut self, seat: usize) -> Result<(), TableError> {
        if !self.players.iter().any(|p| p.raised) {
            return Err(TableError::IllegalAction(
                "cannot call, none of the previous players raised".into(),
            ));
        }
        let owed = self.call_amount_for(seat);
        let cash = self.players[seat].cash;
        if owed > cash {
            return Err(TableError::IllegalAmount(format!(
                "call of {owed} is more than the player's cash of {cash}"
            )));
        }

        self.players[seat].place_bet(owed);
        self.pot += owed;
        *self.bets.entry(self.players[seat].id.clone()).or_insert(0) += owed;
        self.record(seat, HistoryVerb::Call, Some(owed));
        self.advance_turn();
        Ok(())
    }

    fn fold(&mut self, seat: usize) {
        self.players[seat].active = false;
        self.record(seat, HistoryVerb::Fold, None);
        let remaining = self.players.iter().filter(|p| p.active).count();
        if remaining > 1 {
            self.advance_turn();
        } else {
            self.end_by_fold();
        }
    }

    /// Everyone else folded: the last active player takes the pot without showing.
    fn end_by_fold(&mut self) {
        self.state = GameState::Ended;
        self.advance_turn();
        if let Some(seat) = self.current {
            self.award_pot(seat);
            self.players[seat].hand.clear();
        }
    }

    fn complete_round(&mut self, action: Action) -> Result<(), TableError> {
        self.round_is_complete = match action {
            Action::Check => self.players.iter().all(|p| p.checked),
            // folded players keep their last bet and still count here
            _ => self.highest_bet() == self.lowest_bet(),
        };
        if !self.round_is_complete {
            return Ok(());
        }
        self.advance_stage()?;
        if action == Action::Check {
            for p in &mut self.players {
                p.checked = false;
            }
        }
        Ok(())
    }

    fn advance_stage(&mut self) -> Result<(), TableError> {
        match self.state {
            GameState::PreFlop => {
                let flop = self.deck.draw_community_cards(3)?;
                self.community_cards.extend(flop);
                self.state = GameState::Flop;
            }
            GameState::Flop => {
                self.community_cards.push(self.deck.draw()?);
                self.state = GameState::Turn;
                self.advance_turn();
            }
            GameState::Turn => {
                self.community_cards.push(self.deck.draw()?);
                self.state = GameState::River;
                self.advance_turn();
            }
            GameState::River => {
                self.advance_turn();
                self.state = GameState::Ended;
                // hands are not ranked: the pot goes to whoever the turn lands on
                if let Some(seat) = self.current {
                    self.winner_hand = self.players[seat].hand.clone();
                    self.award_pot(seat);
                }
            }
            GameState::Open | GameState::Ended => return Ok(()),
        }
        tracing::info!(
            state = self.state.label(),
            board = self.community_cards.len(),
            pot = self.pot,
            "betting round complete"
        );
        Ok(())
    }

    fn award_pot(&mut self, seat: usize) {
        let amount = std::mem::take(&mut self.pot);
        self.players[seat].add_cash(amount);
        self.winner = Some(seat);
        self.record(seat, HistoryVerb::Win, Some(amount));
        tracing::info!(winner = %self.players[seat].id, amount, "pot awarded");
    }

    /// Seed the turn at the first seat, or move it to the next active seat clockwise.
    fn advance_turn(&mut self) {
        let n = self.players.len();
        if n == 0 {
            return;
        }
        let Some(cur) = self.current else {
            self.current = Some(0);
            return;
        };
        let mut next = cur;
        for _ in 0..n {
            next = (next + 1) % n;
            if self.players[next].active {
                self.current = Some(next);
                return;
            }
        }
        // nobody active: leave the pointer where it is
    }

    fn record(&mut self, seat: usize, verb: HistoryVerb, amount: Option<u64>) {
        let entry = HistoryEntry {
            player_id: self.players[seat].id.clone(),
            verb,
            amount,
            state: self.state,
        };
        self.history.push(entry);
    }
}
