//! Puzzle board: fixed islands plus the bridges placed so far.
//!
//! The island list and its position index are built together in the
//! constructor and never change afterwards; loading another puzzle means
//! building another board. Bridges are the only mutable part.
//!
//! ## Usage
//!
//! ```
//! use board_rules::bridges::PuzzleBoard;
//!
//! let mut board = PuzzleBoard::from_definition(&[(0, 0, 2), (0, 5, 2)], 6);
//! let a = *board.island(0, 0).unwrap();
//! let b = *board.island(0, 5).unwrap();
//!
//! assert_eq!(board.find_potential_connections(), vec![(a, b)]);
//! board.add_bridge(a, b, 2).unwrap();
//! assert!(board.is_solved());
//! ```

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, warn};

use super::island::{Bridge, Direction, Island};
use crate::error::BridgeError;

/// Islands on a square grid and the bridges between them.
#[derive(Clone, Debug)]
pub struct PuzzleBoard {
    size: usize,
    islands: Vec<Island>,
    bridges: Vec<Bridge>,
    /// (row, col) -> index into `islands`.
    island_index: FxHashMap<(usize, usize), usize>,
}

impl PuzzleBoard {
    /// Create a board with no bridges.
    ///
    /// Coordinates are not checked against `size` and duplicate positions
    /// are not rejected; the last island at a position wins lookups.
    #[must_use]
    pub fn new(islands: Vec<Island>, size: usize) -> Self {
        let island_index = islands
            .iter()
            .enumerate()
            .map(|(i, island)| (island.position(), i))
            .collect();

        Self {
            size,
            islands,
            bridges: Vec::new(),
            island_index,
        }
    }

    /// Create a board from (row, col, required count) triples.
    #[must_use]
    pub fn from_definition(islands: &[(usize, usize, u8)], size: usize) -> Self {
        Self::new(islands.iter().copied().map(Island::from).collect(), size)
    }

    /// Create a board with an initial set of bridges.
    ///
    /// Each bridge goes through `add_bridge`, so the first invalid one is
    /// reported.
    pub fn with_bridges(islands: Vec<Island>, bridges: &[Bridge], size: usize) -> Result<Self, BridgeError> {
        let mut board = Self::new(islands, size);
        for bridge in bridges {
            board.add_bridge(*bridge.island1(), *bridge.island2(), bridge.count())?;
        }
        Ok(board)
    }

    /// Side length of the grid.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn islands(&self) -> &[Island] {
        &self.islands
    }

    #[must_use]
    pub fn bridges(&self) -> &[Bridge] {
        &self.bridges
    }

    /// Island at (row, col), if any.
    #[must_use]
    pub fn island(&self, row: usize, col: usize) -> Option<&Island> {
        self.island_index.get(&(row, col)).map(|&i| &self.islands[i])
    }

    /// Sum of spans over every bridge touching `island`.
    #[must_use]
    pub fn island_bridge_count(&self, island: &Island) -> u32 {
        self.bridges
            .iter()
            .filter(|bridge| bridge.touches(island))
            .map(|bridge| u32::from(bridge.count()))
            .sum()
    }

    /// Bridge joining `a` and `b`, in either order.
    #[must_use]
    pub fn bridge_between(&self, a: &Island, b: &Island) -> Option<&Bridge> {
        self.bridges.iter().find(|bridge| bridge.connects(a, b))
    }

    /// Place a bridge of `count` spans between two islands.
    ///
    /// Only the count range, self-connections and duplicate pairs are
    /// rejected. Alignment, crossings and island capacity are reported by
    /// [`PuzzleBoard::violations`].
    pub fn add_bridge(&mut self, island1: Island, island2: Island, count: u8) -> Result<(), BridgeError> {
        let result = self.check_new_bridge(&island1, &island2, count);
        if let Err(err) = &result {
            warn!(%island1, %island2, count, error = %err, "bridge rejected");
            return result;
        }

        debug!(%island1, %island2, count, "bridge added");
        self.bridges.push(Bridge::new(island1, island2, count));
        Ok(())
    }

    fn check_new_bridge(&self, island1: &Island, island2: &Island, count: u8) -> Result<(), BridgeError> {
        if !(1..=2).contains(&count) {
            return Err(BridgeError::InvalidCount(count));
        }
        if island1 == island2 {
            return Err(BridgeError::SelfConnection(*island1));
        }
        if self.bridge_between(island1, island2).is_some() {
            return Err(BridgeError::DuplicateBridge {
                first: *island1,
                second: *island2,
            });
        }
        Ok(())
    }

    /// Remove the bridge joining the same pair with the same count.
    ///
    /// Returns true if a bridge was removed.
    pub fn remove_bridge(&mut self, bridge: &Bridge) -> bool {
        match self.bridges.iter().position(|b| b == bridge) {
            Some(pos) => {
                self.bridges.remove(pos);
                debug!(%bridge, "bridge removed");
                true
            }
            None => false,
        }
    }

    /// Remove every bridge, keeping the islands.
    pub fn clear_bridges(&mut self) {
        debug!(removed = self.bridges.len(), "bridges cleared");
        self.bridges.clear();
    }

    /// Nearest island from `start` along `direction`, stopping at the grid edge.
    #[must_use]
    pub fn find_next_island(&self, start: &Island, direction: Direction) -> Option<&Island> {
        let (dr, dc) = direction.delta();
        let mut row = start.row as isize + dr;
        let mut col = start.col as isize + dc;

        while self.in_bounds(row, col) {
            if let Some(island) = self.island(row as usize, col as usize) {
                return Some(island);
            }
            row += dr;
            col += dc;
        }
        None
    }

    /// Every pair of islands that see each other along a grid axis.
    ///
    /// Pairs are listed once, in the order the scan first meets them:
    /// islands in list order, directions up, right, down, left.
    #[must_use]
    pub fn find_potential_connections(&self) -> Vec<(Island, Island)> {
        let mut seen: FxHashSet<((usize, usize), (usize, usize))> = FxHashSet::default();
        let mut connections = Vec::new();

        for island in &self.islands {
            for direction in Direction::ALL {
                let Some(next) = self.find_next_island(island, direction) else {
                    continue;
                };
                let (a, b) = (island.position(), next.position());
                let key = if a <= b { (a, b) } else { (b, a) };
                if seen.insert(key) {
                    connections.push((*island, *next));
                }
            }
        }

        connections
    }

    /// Each island with its current bridge count.
    #[must_use]
    pub fn satisfaction(&self) -> Vec<(Island, u32)> {
        self.islands
            .iter()
            .map(|island| (*island, self.island_bridge_count(island)))
            .collect()
    }

    /// Whether every island has exactly its required number of bridges.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.islands
            .iter()
            .all(|island| self.island_bridge_count(island) == u32::from(island.value))
    }

    fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.size && (col as usize) < self.size
    }
}
