//! Board abstraction for gravity-drop games.
//!
//! `GameState` never looks inside a concrete grid. Boards implement
//! `DropBoard` to define:
//! - Which columns accept a piece
//! - Where a dropped piece lands
//! - Whether some player has completed a winning run
//!
//! ## Implementation Notes
//!
//! - `drop_in_column` must return a new board and leave `self` untouched
//! - `valid_moves` must be empty exactly when no further drop is possible
//! - `winner` returns the identity stored in the winning cells

use smallvec::SmallVec;

use super::player::{Player, PlayerId};

/// Legal drop targets, in ascending column order.
pub type LegalColumns = SmallVec<[usize; 8]>;

/// Result of a finished game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameOutcome<'a, B> {
    /// Single winner.
    Winner(&'a Player<B>),
    /// Winning run owned by an identity that holds neither seat.
    Unseated(PlayerId),
    /// Board filled without a winning run.
    Draw,
}

impl<B> GameOutcome<'_, B> {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: &Player<B>) -> bool {
        match self {
            GameOutcome::Winner(p) => *p == player,
            GameOutcome::Unseated(id) => *id == player.id(),
            GameOutcome::Draw => false,
        }
    }
}

/// A 2-D grid of cells, each empty or holding a player's piece.
pub trait DropBoard: Clone {
    /// Number of rows (row 0 is the top).
    fn rows(&self) -> usize;

    /// Number of columns.
    fn columns(&self) -> usize;

    /// Occupant of a cell, `None` if empty or out of range.
    fn cell(&self, row: usize, column: usize) -> Option<PlayerId>;

    /// Columns that currently accept a piece.
    fn valid_moves(&self) -> LegalColumns;

    /// Drop a piece for `player` into `column`.
    ///
    /// Returns `None` if the column is full or out of range.
    fn drop_in_column(&self, player: PlayerId, column: usize) -> Option<Self>;

    /// Player owning a winning run, if any.
    fn winner(&self) -> Option<PlayerId>;

    // === Convenience Methods ===

    /// Grid contents as rows of optional occupants, top row first.
    fn grid(&self) -> Vec<Vec<Option<PlayerId>>> {
        (0..self.rows())
            .map(|row| (0..self.columns()).map(|col| self.cell(row, col)).collect())
            .collect()
    }

    /// Whether no column accepts a piece.
    fn is_full(&self) -> bool {
        self.valid_moves().is_empty()
    }
}
