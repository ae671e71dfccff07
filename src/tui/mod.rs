//! Hot-seat terminal front-end: a lobby to seat players, then one table view per seat.

pub mod app;
pub mod controller;
pub mod ui;
