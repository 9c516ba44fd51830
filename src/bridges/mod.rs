//! Bridge-connectivity puzzle.
//!
//! Islands sit on a square grid, each requiring a number of bridges.
//! Bridges run between pairs of islands with one or two parallel spans.
//!
//! - `island`: `Island`, `Bridge` and scan `Direction`
//! - `board`: `PuzzleBoard` with island lookup, bridge edits and the
//!   line-of-sight candidate scan
//! - `validate`: layout checks that `add_bridge` deliberately skips
//! - `solver`: the pluggable `Solver` capability
//! - `presets`: `PuzzleDefinition` and built-in puzzles

pub mod board;
pub mod island;
pub mod presets;
pub mod solver;
pub mod validate;

pub use board::PuzzleBoard;
pub use island::{Bridge, Direction, Island};
pub use presets::{PuzzleDefinition, PuzzlePreset};
pub use solver::{attempt_solve, SolveOutcome, Solver};
pub use validate::Violation;
