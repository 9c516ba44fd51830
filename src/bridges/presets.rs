//! Puzzle definitions and the built-in puzzles.

use serde::{Deserialize, Serialize};

use super::board::PuzzleBoard;

/// Input for building a board: grid size and (row, col, required count) triples.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleDefinition {
    pub size: usize,
    pub islands: Vec<(usize, usize, u8)>,
}

impl PuzzleDefinition {
    /// Build a fresh board with no bridges.
    #[must_use]
    pub fn board(&self) -> PuzzleBoard {
        PuzzleBoard::from_definition(&self.islands, self.size)
    }
}

#[rustfmt::skip]
const SMALL: &[(usize, usize, u8)] = &[
    (0, 0, 3), (0, 5, 4),
    (1, 1, 4), (1, 2, 4),
    (3, 2, 4), (3, 5, 4),
    (4, 1, 4), (4, 4, 4),
    (5, 0, 2), (5, 4, 3),
];

#[rustfmt::skip]
const MEDIUM: &[(usize, usize, u8)] = &[
    (0, 1, 1), (0, 2, 1), (0, 8, 1), (0, 9, 1),
    (1, 4, 2), (1, 5, 2),
    (2, 1, 2), (2, 2, 2), (2, 4, 4), (2, 5, 4), (2, 8, 2), (2, 9, 2),
    (9, 1, 2), (9, 4, 4), (9, 5, 4), (9, 9, 2),
];

#[rustfmt::skip]
const LARGE: &[(usize, usize, u8)] = &[
    (0, 2, 1), (0, 4, 2), (0, 6, 2), (0, 8, 2), (0, 10, 1),
    (1, 0, 2), (1, 3, 4), (1, 5, 2), (1, 7, 1),
    (2, 4, 2), (2, 6, 4), (2, 8, 6), (2, 10, 3),
    (3, 1, 1), (3, 3, 3), (3, 5, 1),
    (4, 0, 2), (4, 4, 2), (4, 6, 4), (4, 8, 8), (4, 10, 5),
    (5, 2, 3), (5, 5, 4),
    (6, 0, 1), (6, 6, 3), (6, 8, 6), (6, 10, 4),
    (7, 3, 1), (7, 5, 4), (7, 7, 1),
    (8, 0, 2), (8, 2, 5), (8, 4, 1), (8, 6, 1), (8, 8, 2),
    (9, 3, 1), (9, 5, 3), (9, 7, 3), (9, 10, 2),
    (10, 0, 1), (10, 2, 3), (10, 4, 2), (10, 6, 2), (10, 9, 1),
];

/// Built-in puzzles of increasing size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PuzzlePreset {
    /// 6 × 6, ten islands.
    #[default]
    Small,
    /// 10 × 10, sixteen islands.
    Medium,
    /// 11 × 11, forty-four islands.
    Large,
}

impl PuzzlePreset {
    pub const ALL: [PuzzlePreset; 3] = [PuzzlePreset::Small, PuzzlePreset::Medium, PuzzlePreset::Large];

    #[must_use]
    pub fn size(self) -> usize {
        match self {
            PuzzlePreset::Small => 6,
            PuzzlePreset::Medium => 10,
            PuzzlePreset::Large => 11,
        }
    }

    fn islands(self) -> &'static [(usize, usize, u8)] {
        match self {
            PuzzlePreset::Small => SMALL,
            PuzzlePreset::Medium => MEDIUM,
            PuzzlePreset::Large => LARGE,
        }
    }

    #[must_use]
    pub fn definition(self) -> PuzzleDefinition {
        PuzzleDefinition {
            size: self.size(),
            islands: self.islands().to_vec(),
        }
    }

    /// Build a fresh board for this puzzle.
    #[must_use]
    pub fn board(self) -> PuzzleBoard {
        PuzzleBoard::from_definition(self.islands(), self.size())
    }
}
