//! holdem-table: a single-table Texas Hold'em betting engine
//!
//! Goals:
//! - One table, one hand: deal, four betting rounds, a single winner
//! - Every rejected action is a `Result` error and leaves the table untouched
//! - Pluggable shuffling so hands can be replayed exactly
//!
//! ## Quick start: play a hand down to the flop
//! ```
//! use holdem_table::config::TableConfig;
//! use holdem_table::shuffler::SeededShuffler;
//! use holdem_table::table::{GameState, Table};
//!
//! let mut table = Table::with_shuffler(TableConfig::default(), SeededShuffler::new(7));
//! table.add_player("wyatt-earp", "Wyatt Earp").unwrap();
//! table.add_player("doc-holiday", "Doc Holiday").unwrap();
//! table.start().unwrap();
//!
//! table.perform_action("raise", 20).unwrap();
//! table.perform_action("call", 0).unwrap();
//! assert_eq!(table.state(), GameState::Flop);
//! assert_eq!(table.pot(), 40);
//! assert_eq!(table.community_cards().len(), 3);
//! ```
//!
//! ## TUI
//! Run the hot-seat table with:
//! ```sh
//! cargo run --bin holdem-table
//! ```

pub mod action;
pub mod cards;
pub mod config;
pub mod deck;
pub mod names;
pub mod player;
pub mod shared;
pub mod shuffler;
pub mod table;
pub mod tui;
pub mod view;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
