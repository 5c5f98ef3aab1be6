use thiserror::Error;

use crate::domain::PlayerId;

/// Raised when standings cannot be split into pairs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PairingError {
    #[error("cannot pair an odd number of players ({0})")]
    OddPlayerCount(usize),
}

/// Constraint violations reported by stores that check them in-process.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("player {0} does not exist")]
    UnknownPlayer(PlayerId),
    #[error("{0} matches still reference registered players")]
    PlayersReferenced(usize),
    #[error("store state is poisoned")]
    Poisoned,
}

/// Context message for a failed statement against a table
pub fn statement_context(operation: &str, table: &str) -> String {
    format!("Failed to {} {}", operation, table)
}
