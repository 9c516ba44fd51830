//! # board-rules
//!
//! Rule engines for two turn-based board games, free of any rendering or
//! input handling:
//!
//! - **Grid game**: a two-player gravity-drop connection game. An immutable
//!   `GameState` validates and applies moves against any board implementing
//!   `DropBoard`; `GridBoard` is the stock rows × columns implementation.
//! - **Bridge puzzle**: a `PuzzleBoard` of fixed islands and the bridges
//!   placed between them, with per-island counts and a line-of-sight scan
//!   for candidate connections.
//!
//! The two engines are independent of each other.
//!
//! ## Example
//!
//! ```
//! use board_rules::{GameState, GridBoard, Player};
//!
//! let state = GameState::new(GridBoard::new(6, 7), Player::human("Alice"), Player::human("Bob"));
//! let state = state.play(3).unwrap();
//! assert_eq!(state.current_player().name(), "Bob");
//! ```
//!
//! ## Modules
//!
//! - `connect`: players, board abstraction, grid board, game state, turn driver
//! - `bridges`: islands, bridges, puzzle board, layout checks, solver hook, presets
//! - `config`: grid geometry configuration
//! - `error`: error types
//! - `logging`: optional `tracing` subscriber setup

pub mod bridges;
pub mod config;
pub mod connect;
pub mod error;
pub mod logging;

// Re-export commonly used types
pub use crate::connect::{
    next_automatic_move, run_automatic, Control, DropBoard, GameOutcome, GameState, GridBoard, LegalColumns,
    MoveFn, MoveRecord, Player, PlayerId,
};

pub use crate::bridges::{
    attempt_solve, Bridge, Direction, Island, PuzzleBoard, PuzzleDefinition, PuzzlePreset, SolveOutcome,
    Solver, Violation,
};

pub use crate::config::GridConfig;
pub use crate::error::{BridgeError, ConfigError, MoveError};
