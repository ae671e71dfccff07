//! Table and application settings.
//!
//! `TableConfig` carries the house rules the engine needs. `AppConfig` adds
//! what the binary needs and is read from the environment (a `.env` file is
//! honoured when present).

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableConfig {
    /// Cash every player sits down with.
    pub starting_cash: u64,
    /// Players required before `start` deals.
    pub min_players: usize,
}

impl TableConfig {
    pub const STARTING_CASH: u64 = 100;
    pub const MIN_PLAYERS: usize = 2;
    /// Seats a 52-card supply can deal: two hole cards each plus a full board.
    pub const MAX_SEATS: usize = 23;

    /// Largest starting cash for which a full table's chips still fit in a `u64`.
    pub const fn max_starting_cash() -> u64 {
        u64::MAX / Self::MAX_SEATS as u64
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self { starting_cash: Self::STARTING_CASH, min_players: Self::MIN_PLAYERS }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub table: TableConfig,
    /// Fixed shuffle seed for reproducible hands; random when unset.
    pub shuffle_seed: Option<u64>,
    /// Log destination. The terminal belongs to the UI, so no file means no logs.
    pub log_file: Option<PathBuf>,
    pub log_level: tracing::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            table: TableConfig::default(),
            shuffle_seed: None,
            log_file: None,
            log_level: tracing::Level::INFO,
        }
    }
}

impl AppConfig {
    pub const STARTING_CASH_VAR: &'static str = "HOLDEM_STARTING_CASH";
    pub const SHUFFLE_SEED_VAR: &'static str = "HOLDEM_SHUFFLE_SEED";
    pub const LOG_FILE_VAR: &'static str = "HOLDEM_LOG_FILE";
    pub const LOG_LEVEL_VAR: &'static str = "HOLDEM_LOG_LEVEL";

    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(cash) = parsed::<_, u64>(&lookup, Self::STARTING_CASH_VAR)? {
            if cash > TableConfig::max_starting_cash() {
                return Err(ConfigError::Invalid {
                    key: Self::STARTING_CASH_VAR,
                    value: cash.to_string(),
                });
            }
            cfg.table.starting_cash = cash;
        }
        cfg.shuffle_seed = parsed(&lookup, Self::SHUFFLE_SEED_VAR)?;
        cfg.log_file = lookup(Self::LOG_FILE_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        if let Some(level) = parsed(&lookup, Self::LOG_LEVEL_VAR)? {
            cfg.log_level = level;
        }
        Ok(cfg)
    }
}

fn parsed<F, T>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}
