//! Solver capability.
//!
//! Solving is not part of the board. Any type implementing `Solver`
//! (including plain closures) can be handed a board; a successful solver
//! is expected to have placed its bridges through `add_bridge`.

use tracing::{info, warn};

use super::board::PuzzleBoard;

/// Something that tries to complete a puzzle board in place.
pub trait Solver {
    /// Try to solve `board`.
    ///
    /// Returns `Ok(true)` when a full solution was placed, `Ok(false)` when
    /// none exists, and `Err` when the solver itself broke down.
    fn solve(&mut self, board: &mut PuzzleBoard) -> anyhow::Result<bool>;
}

impl<F> Solver for F
where
    F: FnMut(&mut PuzzleBoard) -> anyhow::Result<bool>,
{
    fn solve(&mut self, board: &mut PuzzleBoard) -> anyhow::Result<bool> {
        self(board)
    }
}

/// What happened when a solver was run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SolveOutcome {
    Solved,
    NoSolution,
    /// The solver returned an error, rendered with its cause chain.
    Failed(String),
}

impl SolveOutcome {
    #[must_use]
    pub fn is_solved(&self) -> bool {
        matches!(self, SolveOutcome::Solved)
    }
}

/// Run `solver` on `board`, turning its errors into a `SolveOutcome`.
pub fn attempt_solve<S: Solver + ?Sized>(solver: &mut S, board: &mut PuzzleBoard) -> SolveOutcome {
    match solver.solve(board) {
        Ok(true) => {
            if !board.is_solved() {
                warn!(bridges = board.bridges().len(), "solver reported success on an unsolved board");
            }
            info!(bridges = board.bridges().len(), "puzzle solved");
            SolveOutcome::Solved
        }
        Ok(false) => {
            info!("no solution found");
            SolveOutcome::NoSolution
        }
        Err(err) => {
            warn!(error = %err, "error solving puzzle");
            SolveOutcome::Failed(format!("{:#}", err))
        }
    }
}
