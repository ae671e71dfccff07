//! What one seat is allowed to see of the table.
//!
//! A `TableView` is a plain snapshot for presentation layers. Hand cards are
//! only filled in for the viewer's own seat; the winner's hand becomes public
//! once the hand has ended.

use crate::cards::Card;
use crate::table::{GameState, Table};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatView {
    pub id: String,
    pub name: String,
    pub cash: u64,
    pub bet: u64,
    pub active: bool,
    pub checked: bool,
    pub is_current: bool,
    pub is_viewer: bool,
    pub is_winner: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub state: GameState,
    pub pot: u64,
    pub community_cards: Vec<Card>,
    pub seats: Vec<SeatView>,
    /// Seat index of the player to act, if any.
    pub current: Option<usize>,
    /// The viewer's own hand; empty for spectators and before the deal.
    pub own_cards: Vec<Card>,
    /// Chips the viewer would have to add to call, when it is their turn.
    pub to_call: Option<u64>,
    pub winner: Option<usize>,
    pub winner_hand: Vec<Card>,
    pub round_is_complete: bool,
}

impl TableView {
    pub fn for_viewer(table: &Table, viewer: &str) -> Self {
        let current = table.current_seat();
        let winner = table.winner_seat();
        let seats = table
            .players()
            .iter()
            .enumerate()
            .map(|(i, p)| SeatView {
                id: p.id().to_string(),
                name: p.name().to_string(),
                cash: p.cash(),
                bet: p.bet(),
                active: p.is_active(),
                checked: p.is_checked(),
                is_current: current == Some(i),
                is_viewer: p.id() == viewer,
                is_winner: winner == Some(i),
            })
            .collect();
        let viewer_to_act =
            table.state().in_hand() && table.current_player().is_some_and(|p| p.id() == viewer);
        Self {
            state: table.state(),
            pot: table.pot(),
            community_cards: table.community_cards().to_vec(),
            seats,
            current,
            own_cards: table.player_cards(viewer).to_vec(),
            to_call: viewer_to_act.then(|| table.call_amount()),
            winner,
            winner_hand: table.winner_hand().to_vec(),
            round_is_complete: table.round_is_complete(),
        }
    }

    pub fn viewer_seat(&self) -> Option<&SeatView> {
        self.seats.iter().find(|s| s.is_viewer)
    }

    pub fn current_seat(&self) -> Option<&SeatView> {
        self.current.and_then(|i| self.seats.get(i))
    }
}
