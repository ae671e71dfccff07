mod lobby;
mod state;

pub use state::{AppState, InputAction, Scene};
