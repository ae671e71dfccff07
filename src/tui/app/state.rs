use crate::action::Action;
use crate::config::AppConfig;
use crate::names::PlayerDirectory;
use crate::shuffler::SeededShuffler;
use crate::table::Table;
use crate::view::TableView;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Scene {
    Lobby,
    Table,
}

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    LobbyNext,
    LobbyPrev,
    LobbySeat,
    StartHand,
    NewTable,
    ToggleHelp,
    ToggleHistory,
    HistoryUp,
    HistoryDown,
    Check,
    Call,
    Fold,
    AmountOpen,
    AmountDigit(u8),
    AmountBackspace,
    AmountSubmit,
    AmountCancel,
    FocusNext,
    FocusPrev,
    FocusSeat(usize),
    FocusCurrent,
}

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub scene: Scene,
    pub config: AppConfig,
    pub table: Table,
    pub directory: PlayerDirectory,
    // selected lobby row
    pub lobby_index: usize,
    // seat whose cards are shown; does not follow the turn on its own
    pub focus: usize,
    help_open: bool,
    history_open: bool,
    history_offset: usize,
    amount_entry: Option<String>,
    amount_entry_error: Option<String>,
    action_error: Option<String>,
    action_error_at: Option<Instant>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl AppState {
    pub const HISTORY_PAGE_SIZE: usize = 20;
    const ACTION_ERROR_TTL: Duration = Duration::from_secs(3);
    const AMOUNT_MAX_DIGITS: usize = 12;

    pub fn new(config: AppConfig) -> Self {
        Self {
            scene: Scene::Lobby,
            table: Self::build_table(&config),
            config,
            directory: PlayerDirectory::house(),
            lobby_index: 0,
            focus: 0,
            help_open: false,
            history_open: false,
            history_offset: 0,
            amount_entry: None,
            amount_entry_error: None,
            action_error: None,
            action_error_at: None,
        }
    }

    pub(crate) fn build_table(config: &AppConfig) -> Table {
        match config.shuffle_seed {
            Some(seed) => Table::with_shuffler(config.table, SeededShuffler::new(seed)),
            None => Table::new(config.table),
        }
    }

    /// Id of the focused seat, if anyone sits there.
    pub fn viewer_id(&self) -> Option<&str> {
        self.table.players().get(self.focus).map(|p| p.id())
    }

    /// The table as the focused seat sees it.
    pub fn view(&self) -> TableView {
        TableView::for_viewer(&self.table, self.viewer_id().unwrap_or_default())
    }

    fn can_act_for_focus(&self) -> bool {
        self.scene == Scene::Table
            && self.table.state().in_hand()
            && self.table.current_seat() == Some(self.focus)
    }

    fn act(&mut self, action: Action) -> bool {
        if !self.can_act_for_focus() {
            return false;
        }
        match self.table.apply(action) {
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

    pub fn amount_entry_active(&self) -> bool {
        self.amount_entry.is_some()
    }

    pub fn amount_entry_text(&self) -> Option<&str> {
        self.amount_entry.as_deref()
    }

    pub fn amount_entry_error(&self) -> Option<&str> {
        self.amount_entry_error.as_deref()
    }

    pub fn action_error(&self) -> Option<&str> {
        self.action_error.as_deref()
    }

    pub(crate) fn set_action_error(&mut self, message: impl Into<String>) {
        self.action_error = Some(message.into());
        self.action_error_at = Some(Instant::now());
    }

    pub(crate) fn clear_action_error(&mut self) {
        self.action_error = None;
        self.action_error_at = None;
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub fn history_open(&self) -> bool {
        self.history_open
    }

    pub fn history_offset(&self) -> usize {
        self.history_offset
    }

    pub(crate) fn reset_history(&mut self) {
        self.history_open = false;
        self.history_offset = 0;
    }

    /// Smallest raise the current player may make.
    pub fn min_raise(&self) -> u64 {
        self.table.call_amount() + 1
    }

    fn open_amount_entry(&mut self) -> bool {
        if !self.can_act_for_focus() {
            return false;
        }
        self.amount_entry = Some(self.min_raise().to_string());
        self.amount_entry_error = None;
        true
    }

    fn amount_entry_backspace(&mut self) {
        if let Some(buf) = self.amount_entry.as_mut() {
            buf.pop();
        }
        self.amount_entry_error = None;
    }

    fn amount_entry_push_digit(&mut self, digit: u8) {
        if let Some(buf) = self.amount_entry.as_mut() {
            if buf.len() >= Self::AMOUNT_MAX_DIGITS {
                return;
            }
            buf.push(char::from(b'0' + digit));
        }
        self.amount_entry_error = None;
    }

    fn amount_entry_submit(&mut self) -> bool {
        let Some(buf) = self.amount_entry.as_ref() else {
            return false;
        };
        let amount = match buf.parse::<u64>() {
            Ok(v) => v,
            Err(_) => {
                self.amount_entry_error = Some("Invalid amount".to_string());
                return false;
            }
        };
        if !self.can_act_for_focus() {
            self.amount_entry_error = Some("Action not allowed".to_string());
            return false;
        }
        let min = self.min_raise();
        if amount < min {
            self.amount_entry_error = Some(format!("Min raise is {min}"));
            return false;
        }
        match self.table.apply(Action::Raise(amount)) {
            Ok(()) => {
                self.amount_entry = None;
                self.amount_entry_error = None;
                self.clear_action_error();
                true
            }
            Err(err) => {
                self.amount_entry_error = Some(err.to_string());
                false
            }
        }
    }

    fn amount_entry_cancel(&mut self) {
        self.amount_entry = None;
        self.amount_entry_error = None;
    }

    /// Returns true when the input changed the table.
    pub fn handle_input(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::ToggleHelp => {
                self.history_open = false;
                self.help_open = !self.help_open;
                false
            }
            InputAction::ToggleHistory => {
                if self.scene == Scene::Table {
                    self.help_open = false;
                    if !self.history_open {
                        self.history_offset = 0;
                    }
                    self.history_open = !self.history_open;
                }
                false
            }
            InputAction::HistoryUp => {
                if self.scene == Scene::Table && self.history_open {
                    let max_offset =
                        self.table.history_len().saturating_sub(Self::HISTORY_PAGE_SIZE);
                    self.history_offset = (self.history_offset + 1).min(max_offset);
                }
                false
            }
            InputAction::HistoryDown => {
                if self.scene == Scene::Table && self.history_open && self.history_offset > 0 {
                    self.history_offset -= 1;
                }
                false
            }
            InputAction::LobbyNext => {
                if self.scene == Scene::Lobby {
                    self.lobby_next();
                }
                false
            }
            InputAction::LobbyPrev => {
                if self.scene == Scene::Lobby {
                    self.lobby_prev();
                }
                false
            }
            InputAction::LobbySeat => self.scene == Scene::Lobby && self.seat_selected(),
            InputAction::StartHand => self.scene == Scene::Lobby && self.start_hand(),
            InputAction::NewTable => self.scene == Scene::Table && self.new_table(),
            InputAction::Check => self.act(Action::Check),
            InputAction::Call => self.act(Action::Call),
            InputAction::Fold => self.act(Action::Fold),
            InputAction::AmountOpen => self.open_amount_entry(),
            InputAction::AmountDigit(d) => {
                self.amount_entry_push_digit(d);
                false
            }
            InputAction::AmountBackspace => {
                self.amount_entry_backspace();
                false
            }
            InputAction::AmountSubmit => self.amount_entry_submit(),
            InputAction::AmountCancel => {
                self.amount_entry_cancel();
                false
            }
            InputAction::FocusNext => {
                if self.scene == Scene::Table {
                    self.focus_next();
                }
                false
            }
            InputAction::FocusPrev => {
                if self.scene == Scene::Table {
                    self.focus_prev();
                }
                false
            }
            InputAction::FocusSeat(idx) => {
                if self.scene == Scene::Table {
                    self.set_focus(idx);
                }
                false
            }
            InputAction::FocusCurrent => {
                if self.scene == Scene::Table {
                    if let Some(seat) = self.table.current_seat() {
                        self.focus = seat;
                    }
                }
                false
            }
        }
    }

    pub fn focus_next(&mut self) {
        let n = self.table.players().len();
        if n == 0 {
            return;
        }
        self.focus = (self.focus + 1) % n;
    }

    pub fn focus_prev(&mut self) {
        let n = self.table.players().len();
        if n == 0 {
            return;
        }
        self.focus = (self.focus + n - 1) % n;
    }

    pub fn set_focus(&mut self, idx: usize) {
        let n = self.table.players().len();
        if n == 0 {
            return;
        }
        self.focus = idx % n;
    }

    /// Expire stale error messages; called on every controller tick.
    pub fn on_tick(&mut self) {
        if let Some(at) = self.action_error_at {
            if at.elapsed() >= Self::ACTION_ERROR_TTL {
                self.clear_action_error();
            }
        }
    }
}
