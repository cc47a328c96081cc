//! Error types for the engine and its line protocol

use thiserror::Error;

use crate::board::Stone;

/// Everything that can go wrong between reading a command and answering it.
///
/// All of these end the session: the protocol has no error reply.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid colour parameter: {0:?} (expected B or W)")]
    InvalidColor(String),

    #[error("invalid time parameter: {0:?} (expected a positive number of seconds)")]
    InvalidTimeBudget(String),

    #[error("invalid game state on input: {0}")]
    MalformedBoard(String),

    #[error("invalid command: {0:?}")]
    UnknownCommand(String),

    #[error("MOVE received before START")]
    NotStarted,

    #[error("no legal move for {0:?}")]
    NoLegalMoves(Stone),

    #[error("invalid engine configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, GameError>;
