//! Immutable game state for the grid game.
//!
//! Every transition builds a fresh `GameState`; the previous state stays
//! valid, so a chain of states is a replayable history. The state also
//! carries the list of moves that produced it.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::board::{DropBoard, GameOutcome};
use super::player::{Player, PlayerId};
use crate::error::MoveError;

/// A move that has been applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who moved.
    pub player: PlayerId,

    /// Column the piece was dropped into.
    pub column: usize,
}

/// Snapshot of a two-player drop game.
///
/// `game_over` is true iff the board reports a winner or no legal move
/// remains.
/// Once over, every `apply_move` fails with `MoveError::GameOver`.
#[derive(Clone, Debug)]
pub struct GameState<B: DropBoard> {
    board: B,
    players: [Player<B>; 2],
    current_player: usize,
    game_over: bool,
    winner: Option<Player<B>>,
    history: Vector<MoveRecord>,
}

impl<B: DropBoard> GameState<B> {
    /// Create the initial state with `player0` to move.
    ///
    /// The board may already hold pieces; its terminal status is
    /// evaluated immediately.
    pub fn new(board: B, player0: Player<B>, player1: Player<B>) -> Self {
        let players = [player0, player1];
        let winner = Self::resolve_winner(&players, None, &board);
        let game_over = board.winner().is_some() || board.is_full();

        Self {
            board,
            players,
            current_player: 0,
            game_over,
            winner,
            history: Vector::new(),
        }
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &B {
        &self.board
    }

    /// Both players, in turn order.
    #[must_use]
    pub fn players(&self) -> &[Player<B>; 2] {
        &self.players
    }

    /// Index (0 or 1) of the player to move.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_player
    }

    /// Player to move.
    #[must_use]
    pub fn current_player(&self) -> &Player<B> {
        &self.players[self.current_player]
    }

    /// Player waiting for their turn.
    #[must_use]
    pub fn opponent(&self) -> &Player<B> {
        &self.players[(self.current_player + 1) % 2]
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Winning player, `None` while running or on a draw.
    ///
    /// A mover from outside the two seats who completes a run is reported
    /// here too. A starting board already won by an unseated identity has
    /// no `Player` to report; `outcome` gives its id.
    #[must_use]
    pub fn winner(&self) -> Option<&Player<B>> {
        self.winner.as_ref()
    }

    /// Game outcome if the game is over.
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome<'_, B>> {
        if !self.game_over {
            return None;
        }
        Some(match (&self.winner, self.board.winner()) {
            (Some(player), _) => GameOutcome::Winner(player),
            (None, Some(id)) => GameOutcome::Unseated(id),
            (None, None) => GameOutcome::Draw,
        })
    }

    /// Moves applied since the initial state, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Make a move as `player` in `column` and return the resulting state.
    ///
    /// Fails with `GameOver` once the game has ended, then with
    /// `IllegalMove` if the board does not list `column` as a legal drop.
    /// The turn passes to the other player even on the final move.
    pub fn apply_move(&self, player: &Player<B>, column: usize) -> Result<Self, MoveError> {
        if self.game_over {
            warn!(player = player.name(), column, "move rejected: game over");
            return Err(MoveError::GameOver {
                player: player.name().to_string(),
            });
        }

        let legal = self.board.valid_moves();
        let illegal = || MoveError::IllegalMove {
            player: player.name().to_string(),
            column,
            legal: legal.to_vec(),
        };

        if !legal.contains(&column) {
            warn!(player = player.name(), column, "move rejected: illegal column");
            return Err(illegal());
        }

        let board = self.board.drop_in_column(player.id(), column).ok_or_else(illegal)?;
        let winner = Self::resolve_winner(&self.players, Some(player), &board);
        let game_over = board.winner().is_some() || board.is_full();

        let mut history = self.history.clone();
        history.push_back(MoveRecord {
            player: player.id(),
            column,
        });

        debug!(player = player.name(), column, move_number = history.len(), "move applied");
        if game_over {
            match &winner {
                Some(w) => info!(winner = w.name(), "game over"),
                None => info!("game over: draw"),
            }
        }

        Ok(Self {
            board,
            players: self.players.clone(),
            current_player: (self.current_player + 1) % 2,
            game_over,
            winner,
            history,
        })
    }

    /// Make a move as the current player.
    pub fn play(&self, column: usize) -> Result<Self, MoveError> {
        self.apply_move(self.current_player(), column)
    }

    fn resolve_winner(players: &[Player<B>; 2], mover: Option<&Player<B>>, board: &B) -> Option<Player<B>> {
        let id = board.winner()?;
        players.iter().chain(mover).find(|p| p.id() == id).cloned()
    }
}
