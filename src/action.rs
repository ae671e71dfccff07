use crate::table::TableError;
use std::fmt;

/// A player's move on their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Check,
    /// Raise by committing this many chips.
    Raise(u64),
    Call,
    Fold,
}

impl Action {
    /// Build an action from its wire name. `amount` is only read for `raise`.
    ///
    /// ```
    /// use holdem_table::action::Action;
    ///
    /// assert_eq!(Action::parse("raise", 20).unwrap(), Action::Raise(20));
    /// assert_eq!(Action::parse("check", 99).unwrap(), Action::Check);
    /// assert!(Action::parse(" ", 0).is_err());
    /// ```
    pub fn parse(name: &str, amount: u64) -> Result<Self, TableError> {
        if name.trim().is_empty() {
            return Err(TableError::IllegalAction("action cannot be empty".into()));
        }
        match name {
            "check" => Ok(Action::Check),
            "raise" => Ok(Action::Raise(amount)),
            "call" => Ok(Action::Call),
            "fold" => Ok(Action::Fold),
            other => Err(TableError::IllegalAction(format!("unsupported action: {other}"))),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Action::Check => "check",
            Action::Raise(_) => "raise",
            Action::Call => "call",
            Action::Fold => "fold",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Raise(amount) => write!(f, "raise {amount}"),
            other => f.write_str(other.name()),
        }
    }
}
