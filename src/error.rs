//! Error types for both rule engines and configuration loading.
//!
//! Every failure is local and recoverable: callers reject the input and
//! keep the previous state.

use crate::bridges::Island;

/// Errors raised by `GameState::apply_move`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("invalid move from '{player}', the game is already over")]
    GameOver { player: String },

    #[error("invalid move from '{player}' to column {column} (legal: {legal:?})")]
    IllegalMove {
        player: String,
        column: usize,
        legal: Vec<usize>,
    },
}

/// Errors raised by `PuzzleBoard::add_bridge`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BridgeError {
    #[error("bridge count must be either 1 or 2, got {0}")]
    InvalidCount(u8),

    #[error("cannot connect island {0} to itself")]
    SelfConnection(Island),

    #[error("bridge between {first} and {second} already exists")]
    DuplicateBridge { first: Island, second: Island },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
