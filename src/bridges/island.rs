//! Islands, bridges and scan directions.
//!
//! Islands compare by position only: two `Island` values at the same
//! (row, col) are the same island whatever their required count. Bridges
//! are unordered, so `Bridge::new(a, b, n) == Bridge::new(b, a, n)`.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A fixed node of the puzzle.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Island {
    pub row: usize,
    pub col: usize,
    /// Required number of bridges.
    pub value: u8,
}

impl Island {
    #[must_use]
    pub const fn new(row: usize, col: usize, value: u8) -> Self {
        Self { row, col, value }
    }

    /// Grid position as (row, col).
    #[must_use]
    pub const fn position(&self) -> (usize, usize) {
        (self.row, self.col)
    }
}

impl PartialEq for Island {
    fn eq(&self, other: &Self) -> bool {
        self.position() == other.position()
    }
}

impl Eq for Island {}

impl Hash for Island {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.position().hash(state);
    }
}

impl fmt::Display for Island {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})={}", self.row, self.col, self.value)
    }
}

impl From<(usize, usize, u8)> for Island {
    fn from((row, col, value): (usize, usize, u8)) -> Self {
        Self::new(row, col, value)
    }
}

/// One or two parallel spans between two islands.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Bridge {
    island1: Island,
    island2: Island,
    count: u8,
}

impl Bridge {
    /// Create a bridge value.
    ///
    /// No checks are made here; `PuzzleBoard::add_bridge` enforces the
    /// count range and rejects self-connections and duplicates.
    #[must_use]
    pub const fn new(island1: Island, island2: Island, count: u8) -> Self {
        Self {
            island1,
            island2,
            count,
        }
    }

    #[must_use]
    pub fn island1(&self) -> &Island {
        &self.island1
    }

    #[must_use]
    pub fn island2(&self) -> &Island {
        &self.island2
    }

    /// Number of parallel spans (1 or 2).
    #[must_use]
    pub fn count(&self) -> u8 {
        self.count
    }

    /// Whether `island` is one of the endpoints.
    #[must_use]
    pub fn touches(&self, island: &Island) -> bool {
        self.island1 == *island || self.island2 == *island
    }

    /// Whether this bridge joins `a` and `b`, in either order.
    #[must_use]
    pub fn connects(&self, a: &Island, b: &Island) -> bool {
        (self.island1 == *a && self.island2 == *b) || (self.island1 == *b && self.island2 == *a)
    }

    /// The endpoint opposite `island`.
    #[must_use]
    pub fn other_end(&self, island: &Island) -> Option<&Island> {
        if self.island1 == *island {
            Some(&self.island2)
        } else if self.island2 == *island {
            Some(&self.island1)
        } else {
            None
        }
    }

    /// Whether both endpoints share a row.
    #[must_use]
    pub fn is_horizontal(&self) -> bool {
        self.island1.row == self.island2.row
    }

    /// Endpoint positions with the smaller one first.
    fn ordered_positions(&self) -> ((usize, usize), (usize, usize)) {
        let a = self.island1.position();
        let b = self.island2.position();
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }
}

impl PartialEq for Bridge {
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count && self.ordered_positions() == other.ordered_positions()
    }
}

impl Eq for Bridge {}

impl Hash for Bridge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ordered_positions().hash(state);
        self.count.hash(state);
    }
}

impl fmt::Display for Bridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -{}- {}", self.island1, self.count, self.island2)
    }
}

/// Axis directions scanned for neighbouring islands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// All directions in scan order.
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Right, Direction::Down, Direction::Left];

    /// Step as (row delta, col delta).
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
        }
    }
}
