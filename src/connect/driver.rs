//! Headless turn loop.
//!
//! Presentation layers feed human moves through `GameState::apply_move`
//! and use these helpers to let automatic players respond. Pacing, input
//! handling and rendering stay with the caller.

use tracing::debug;

use super::board::DropBoard;
use super::state::GameState;
use crate::error::MoveError;

/// Column chosen by the current player's move function.
///
/// Returns `None` if the game is over or the current player awaits input.
pub fn next_automatic_move<B: DropBoard>(state: &GameState<B>) -> Option<usize> {
    if state.is_game_over() {
        return None;
    }
    state
        .current_player()
        .next_move(state.board(), state.opponent())
}

/// Apply automatic moves until the game ends or a player awaits input.
///
/// An automatic player choosing an illegal column aborts the loop with the
/// rejection; the last valid state is discarded along with the error, so
/// callers that need it should step with [`next_automatic_move`].
pub fn run_automatic<B: DropBoard>(state: GameState<B>) -> Result<GameState<B>, MoveError> {
    let mut state = state;
    while let Some(column) = next_automatic_move(&state) {
        debug!(player = state.current_player().name(), column, "automatic move");
        state = state.play(column)?;
    }
    Ok(state)
}
