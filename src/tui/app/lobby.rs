use super::{AppState, Scene};
use crate::names::{self, NameResolver};
use crate::table::GameState;

impl AppState {
    /// Lobby rows, `[x]` marking players already at the table.
    pub fn lobby_items_display(&self) -> Vec<String> {
        self.directory
            .entries()
            .map(|(id, name)| {
                let mark = if self.table.player(id).is_some() { 'x' } else { ' ' };
                format!("[{mark}] {name}")
            })
            .collect()
    }

    pub fn lobby_next(&mut self) {
        let n = self.directory.len();
        if n == 0 {
            return;
        }
        self.lobby_index = (self.lobby_index + 1) % n;
    }

    pub fn lobby_prev(&mut self) {
        let n = self.directory.len();
        if n == 0 {
            return;
        }
        self.lobby_index = (self.lobby_index + n - 1) % n;
    }

    /// Seat the highlighted directory entry.
    pub fn seat_selected(&mut self) -> bool {
        let Some(id) = self.directory.entries().nth(self.lobby_index).map(|(id, _)| id.to_string())
        else {
            return false;
        };
        match names::seat_player(&mut self.table, &self.directory, &id) {
            Ok(()) => {
                self.clear_action_error();
                true
            }
            Err(err) => {
                self.set_action_error(err.to_string());
                false
            }
        }
    }

    /// Deal the hand and switch to the table, focused on the first player to act.
    pub fn start_hand(&mut self) -> bool {
        let seated = self.table.players().len();
        let required = self.table.config().min_players;
        if seated < required {
            self.set_action_error(format!("Need at least {required} players, {seated} seated"));
            return false;
        }
        if let Err(err) = self.table.start() {
            self.set_action_error(err.to_string());
            return false;
        }
        if self.table.state() != GameState::PreFlop {
            return false;
        }
        self.clear_action_error();
        self.focus = self.table.current_seat().unwrap_or(0);
        self.reset_history();
        self.scene = Scene::Table;
        true
    }

    /// Replace a finished table with a fresh one holding the same players, and deal.
    pub fn new_table(&mut self) -> bool {
        if self.table.state() != GameState::Ended {
            return false;
        }
        let ids: Vec<String> = self.table.players().iter().map(|p| p.id().to_string()).collect();
        let mut table = Self::build_table(&self.config);
        for id in &ids {
            let name = self.directory.name_for(id);
            if let Err(err) = table.add_player(id.as_str(), name) {
                self.set_action_error(err.to_string());
                return false;
            }
        }
        self.table = table;
        self.scene = Scene::Lobby;
        self.start_hand()
    }
}
