//! Gravity-drop connection game.
//!
//! - `player`: player identity and move-selection control
//! - `board`: the `DropBoard` abstraction the state machine is written against
//! - `grid`: `GridBoard`, a rows × columns board with configurable run length
//! - `state`: immutable `GameState` and its `apply_move` transition
//! - `driver`: helpers that let automatic players take their turns

pub mod board;
pub mod driver;
pub mod grid;
pub mod player;
pub mod state;

pub use board::{DropBoard, GameOutcome, LegalColumns};
pub use driver::{next_automatic_move, run_automatic};
pub use grid::GridBoard;
pub use player::{Control, MoveFn, Player, PlayerId};
pub use state::{GameState, MoveRecord};
