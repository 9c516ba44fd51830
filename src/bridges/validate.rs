//! Geometric and capacity checks for placed bridges.
//!
//! `add_bridge` accepts any pair of distinct islands. Whether the placed
//! bridges form a legal layout is answered here, for solvers and UIs that
//! want to flag mistakes without the board refusing edits.

use std::fmt;

use super::board::PuzzleBoard;
use super::island::{Bridge, Island};

/// A rule broken by the current bridge layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Violation {
    /// An endpoint is not an island of this board.
    UnknownIsland { bridge: Bridge, island: Island },
    /// Endpoints share neither a row nor a column.
    NotAligned { bridge: Bridge },
    /// Another island sits between the endpoints.
    Obstructed { bridge: Bridge, by: Island },
    /// A horizontal and a vertical bridge cross.
    Crossing { first: Bridge, second: Bridge },
    /// An island carries more spans than it requires.
    OverCapacity { island: Island, count: u32 },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::UnknownIsland { bridge, island } => {
                write!(f, "bridge {} uses unknown island {}", bridge, island)
            }
            Violation::NotAligned { bridge } => write!(f, "bridge {} is not straight", bridge),
            Violation::Obstructed { bridge, by } => {
                write!(f, "bridge {} passes through island {}", bridge, by)
            }
            Violation::Crossing { first, second } => {
                write!(f, "bridges {} and {} cross", first, second)
            }
            Violation::OverCapacity { island, count } => {
                write!(f, "island {} has {} bridges", island, count)
            }
        }
    }
}

/// Span of a straight bridge: fixed coordinate and open interval between endpoints.
#[derive(Clone, Copy)]
struct Span {
    horizontal: bool,
    line: usize,
    low: usize,
    high: usize,
}

impl Span {
    fn of(bridge: &Bridge) -> Option<Self> {
        let (a, b) = (bridge.island1(), bridge.island2());
        if a.row == b.row {
            Some(Self {
                horizontal: true,
                line: a.row,
                low: a.col.min(b.col),
                high: a.col.max(b.col),
            })
        } else if a.col == b.col {
            Some(Self {
                horizontal: false,
                line: a.col,
                low: a.row.min(b.row),
                high: a.row.max(b.row),
            })
        } else {
            None
        }
    }

    /// Cells strictly between the endpoints, as (row, col).
    fn interior(self) -> impl Iterator<Item = (usize, usize)> {
        (self.low + 1..self.high).map(move |i| if self.horizontal { (self.line, i) } else { (i, self.line) })
    }

    fn crosses(self, other: Span) -> bool {
        self.horizontal != other.horizontal
            && self.low < other.line
            && other.line < self.high
            && other.low < self.line
            && self.line < other.high
    }
}

impl PuzzleBoard {
    /// Every rule the current bridges break, in a stable order.
    ///
    /// Per-bridge problems come first (in bridge order), then crossings,
    /// then over-filled islands (in island order).
    #[must_use]
    pub fn violations(&self) -> Vec<Violation> {
        let mut found = Vec::new();
        let mut spans: Vec<(Bridge, Span)> = Vec::new();

        for bridge in self.bridges() {
            let unknown = [bridge.island1(), bridge.island2()]
                .into_iter()
                .find(|island| self.island(island.row, island.col).is_none());
            if let Some(island) = unknown {
                found.push(Violation::UnknownIsland {
                    bridge: *bridge,
                    island: *island,
                });
                continue;
            }

            let Some(span) = Span::of(bridge) else {
                found.push(Violation::NotAligned { bridge: *bridge });
                continue;
            };

            if let Some(by) = span.interior().find_map(|(row, col)| self.island(row, col)) {
                found.push(Violation::Obstructed {
                    bridge: *bridge,
                    by: *by,
                });
            }
            spans.push((*bridge, span));
        }

        for (i, (first, a)) in spans.iter().enumerate() {
            for (second, b) in &spans[i + 1..] {
                if a.crosses(*b) {
                    found.push(Violation::Crossing {
                        first: *first,
                        second: *second,
                    });
                }
            }
        }

        for island in self.islands() {
            let count = self.island_bridge_count(island);
            if count > u32::from(island.value) {
                found.push(Violation::OverCapacity {
                    island: *island,
                    count,
                });
            }
        }

        found
    }

    /// Whether the layout breaks no rule (it may still be incomplete).
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.violations().is_empty()
    }
}
