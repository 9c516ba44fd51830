//! Rectangular gravity grid.
//!
//! `GridBoard` is the stock `DropBoard`: any number of rows and columns and
//! any winning run length. Cells are stored row-major in a persistent
//! `im::Vector`, so every drop yields a new board that shares structure
//! with the old one.

use im::Vector;

use super::board::{DropBoard, LegalColumns};
use super::player::PlayerId;
use crate::config::GridConfig;
use crate::error::ConfigError;

/// Run directions checked for a win: right, down, down-right, down-left.
const RUN_DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// A rows × columns grid where pieces settle in the lowest empty row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridBoard {
    rows: usize,
    columns: usize,
    connect: usize,
    cells: Vector<Option<PlayerId>>,
}

impl GridBoard {
    /// Create an empty board needing four in a row to win.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    #[must_use]
    pub fn new(rows: usize, columns: usize) -> Self {
        assert!(rows > 0, "Board must have at least 1 row");
        assert!(columns > 0, "Board must have at least 1 column");

        Self {
            rows,
            columns,
            connect: 4,
            cells: std::iter::repeat(None).take(rows * columns).collect(),
        }
    }

    /// Set the winning run length.
    ///
    /// # Panics
    ///
    /// Panics if `connect` is zero.
    #[must_use]
    pub fn with_connect(mut self, connect: usize) -> Self {
        assert!(connect > 0, "Run length must be at least 1");
        self.connect = connect;
        self
    }

    /// Create an empty board from a validated configuration.
    pub fn from_config(config: &GridConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config.rows, config.columns).with_connect(config.connect))
    }

    /// Winning run length.
    #[must_use]
    pub fn connect(&self) -> usize {
        self.connect
    }

    /// Row a piece dropped into `column` would land in.
    #[must_use]
    pub fn landing_row(&self, column: usize) -> Option<usize> {
        if column >= self.columns {
            return None;
        }
        (0..self.rows)
            .rev()
            .find(|&row| self.cells[self.index(row, column)].is_none())
    }

    /// Number of pieces on the board.
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    fn index(&self, row: usize, column: usize) -> usize {
        row * self.columns + column
    }

    fn offset(&self, row: usize, column: usize, dr: isize, dc: isize, step: usize) -> Option<(usize, usize)> {
        let r = row as isize + dr * step as isize;
        let c = column as isize + dc * step as isize;
        if r < 0 || c < 0 || r >= self.rows as isize || c >= self.columns as isize {
            return None;
        }
        Some((r as usize, c as usize))
    }

    /// Whether `connect` cells starting at (row, column) along (dr, dc) all hold `player`.
    fn run_from(&self, row: usize, column: usize, dr: isize, dc: isize, player: PlayerId) -> bool {
        (0..self.connect).all(|step| {
            self.offset(row, column, dr, dc, step)
                .map_or(false, |(r, c)| self.cell(r, c) == Some(player))
        })
    }
}

impl Default for GridBoard {
    fn default() -> Self {
        Self::new(6, 7)
    }
}

impl DropBoard for GridBoard {
    fn rows(&self) -> usize {
        self.rows
    }

    fn columns(&self) -> usize {
        self.columns
    }

    fn cell(&self, row: usize, column: usize) -> Option<PlayerId> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        self.cells[self.index(row, column)]
    }

    fn valid_moves(&self) -> LegalColumns {
        (0..self.columns)
            .filter(|&col| self.cells[self.index(0, col)].is_none())
            .collect()
    }

    fn drop_in_column(&self, player: PlayerId, column: usize) -> Option<Self> {
        let row = self.landing_row(column)?;
        let mut next = self.clone();
        let idx = next.index(row, column);
        next.cells.set(idx, Some(player));
        Some(next)
    }

    fn winner(&self) -> Option<PlayerId> {
        for row in 0..self.rows {
            for column in 0..self.columns {
                let Some(player) = self.cell(row, column) else {
                    continue;
                };
                if RUN_DIRECTIONS
                    .iter()
                    .any(|&(dr, dc)| self.run_from(row, column, dr, dc, player))
                {
                    return Some(player);
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connect::Player;

    fn ids() -> (PlayerId, PlayerId) {
        let a: Player<GridBoard> = Player::human("A");
        let b: Player<GridBoard> = Player::human("B");
        (a.id(), b.id())
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = GridBoard::new(6, 7);
        for row in 0..6 {
            for col in 0..7 {
                assert_eq!(board.cell(row, col), None);
            }
        }
        assert_eq!(board.valid_moves().as_slice(), &[0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(board.piece_count(), 0);
    }

    #[test]
    fn test_drop_settles_at_bottom() {
        let (a, b) = ids();
        let board = GridBoard::new(6, 7);

        let first = board.drop_in_column(a, 3).unwrap();
        assert_eq!(first.cell(5, 3), Some(a));

        let second = first.drop_in_column(b, 3).unwrap();
        assert_eq!(second.cell(4, 3), Some(b));
        assert_eq!(second.cell(5, 3), Some(a));

        // Input boards untouched
        assert_eq!(board.cell(5, 3), None);
        assert_eq!(first.cell(4, 3), None);
    }

    #[test]
    fn test_full_column_rejected() {
        let (a, _) = ids();
        let mut board = GridBoard::new(3, 2);
        for _ in 0..3 {
            board = board.drop_in_column(a, 0).unwrap();
        }

        assert_eq!(board.landing_row(0), None);
        assert!(board.drop_in_column(a, 0).is_none());
        assert_eq!(board.valid_moves().as_slice(), &[1]);
    }

    #[test]
    fn test_out_of_range_column() {
        let (a, _) = ids();
        let board = GridBoard::new(6, 7);
        assert!(board.drop_in_column(a, 7).is_none());
        assert_eq!(board.cell(0, 7), None);
        assert_eq!(board.cell(6, 0), None);
    }

    #[test]
    fn test_horizontal_win() {
        let (a, _) = ids();
        let mut board = GridBoard::new(6, 7);
        for col in 1..4 {
            board = board.drop_in_column(a, col).unwrap();
        }
        assert_eq!(board.winner(), None);

        board = board.drop_in_column(a, 4).unwrap();
        assert_eq!(board.winner(), Some(a));
    }

    #[test]
    fn test_vertical_win() {
        let (_, b) = ids();
        let mut board = GridBoard::new(6, 7);
        for _ in 0..4 {
            board = board.drop_in_column(b, 6).unwrap();
        }
        assert_eq!(board.winner(), Some(b));
    }

    #[test]
    fn test_diagonal_wins() {
        let (a, b) = ids();

        // Rising diagonal from (5,0) to (2,3)
        let mut board = GridBoard::new(6, 7);
        for col in 0..4 {
            for _ in 0..col {
                board = board.drop_in_column(b, col).unwrap();
            }
            board = board.drop_in_column(a, col).unwrap();
        }
        assert_eq!(board.winner(), Some(a));

        // Falling diagonal from (2,0) to (5,3)
        let mut board = GridBoard::new(6, 7);
        for col in 0..4 {
            for _ in 0..(3 - col) {
                board = board.drop_in_column(b, col).unwrap();
            }
            board = board.drop_in_column(a, col).unwrap();
        }
        assert_eq!(board.winner(), Some(a));
    }

    #[test]
    fn test_broken_run_is_not_a_win() {
        let (a, b) = ids();
        let mut board = GridBoard::new(6, 7);
        for col in [0, 1, 3, 4] {
            board = board.drop_in_column(a, col).unwrap();
        }
        board = board.drop_in_column(b, 2).unwrap();
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_custom_run_length() {
        let (a, _) = ids();
        let mut board = GridBoard::new(4, 4).with_connect(3);
        for col in 0..3 {
            board = board.drop_in_column(a, col).unwrap();
        }
        assert_eq!(board.connect(), 3);
        assert_eq!(board.winner(), Some(a));
    }

    #[test]
    fn test_from_config() {
        let config = GridConfig::new().with_rows(5).with_columns(8).with_connect(5);
        let board = GridBoard::from_config(&config).unwrap();
        assert_eq!(board.rows(), 5);
        assert_eq!(board.columns(), 8);
        assert_eq!(board.connect(), 5);

        let bad = GridConfig::new().with_rows(0);
        assert!(GridBoard::from_config(&bad).is_err());
    }

    #[test]
    fn test_grid_rows() {
        let (a, _) = ids();
        let board = GridBoard::new(2, 3).drop_in_column(a, 1).unwrap();
        assert_eq!(
            board.grid(),
            vec![vec![None, None, None], vec![None, Some(a), None]]
        );
        assert!(!board.is_full());
    }

    #[test]
    #[should_panic(expected = "Board must have at least 1 row")]
    fn test_zero_rows() {
        let _ = GridBoard::new(0, 7);
    }
}
