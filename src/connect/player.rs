//! Players of the grid game.
//!
//! ## PlayerId
//!
//! Identity token handed out once per constructed `Player`. Board cells
//! record the `PlayerId` of the occupying player, and players compare by
//! this token rather than by name, so two players called "Bot" are still
//! distinct. Cloning a `Player` keeps its identity.
//!
//! ## Control
//!
//! A player either carries a move-selection function or waits for external
//! input (a human clicking a column, a network message, ...).

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

static NEXT_PLAYER_ID: AtomicU64 = AtomicU64::new(0);

/// Identity of a player, unique per constructed `Player`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(u64);

impl PlayerId {
    fn fresh() -> Self {
        Self(NEXT_PLAYER_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw token value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player#{}", self.0)
    }
}

/// Move-selection function: `(board, acting player, opponent) -> column`.
pub type MoveFn<B> = Arc<dyn Fn(&B, &Player<B>, &Player<B>) -> usize + Send + Sync>;

/// How a player's moves are chosen.
pub enum Control<B> {
    /// Moves come from the attached function.
    Automatic(MoveFn<B>),
    /// Moves must be fed in from outside.
    AwaitsInput,
}

impl<B> Clone for Control<B> {
    fn clone(&self) -> Self {
        match self {
            Control::Automatic(mover) => Control::Automatic(Arc::clone(mover)),
            Control::AwaitsInput => Control::AwaitsInput,
        }
    }
}

impl<B> fmt::Debug for Control<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Control::Automatic(_) => f.write_str("Automatic"),
            Control::AwaitsInput => f.write_str("AwaitsInput"),
        }
    }
}

/// A named participant of the grid game.
pub struct Player<B> {
    id: PlayerId,
    name: String,
    control: Control<B>,
}

impl<B> Player<B> {
    /// Create a player whose moves are supplied externally.
    pub fn human(name: impl Into<String>) -> Self {
        Self {
            id: PlayerId::fresh(),
            name: name.into(),
            control: Control::AwaitsInput,
        }
    }

    /// Create a player whose moves come from `mover`.
    pub fn automatic<F>(name: impl Into<String>, mover: F) -> Self
    where
        F: Fn(&B, &Player<B>, &Player<B>) -> usize + Send + Sync + 'static,
    {
        Self {
            id: PlayerId::fresh(),
            name: name.into(),
            control: Control::Automatic(Arc::new(mover)),
        }
    }

    /// Identity token of this player.
    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Display name (not unique).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn control(&self) -> &Control<B> {
        &self.control
    }

    /// Whether this player picks its own moves.
    #[must_use]
    pub fn is_automatic(&self) -> bool {
        matches!(self.control, Control::Automatic(_))
    }

    /// Ask the move-selection function for a column.
    ///
    /// Returns `None` for players that await external input.
    pub fn next_move(&self, board: &B, opponent: &Player<B>) -> Option<usize> {
        match &self.control {
            Control::Automatic(mover) => Some(mover(board, self, opponent)),
            Control::AwaitsInput => None,
        }
    }
}

impl<B> Clone for Player<B> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            name: self.name.clone(),
            control: self.control.clone(),
        }
    }
}

impl<B> PartialEq for Player<B> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<B> Eq for Player<B> {}

impl<B> fmt::Debug for Player<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("control", &self.control)
            .finish()
    }
}

impl<B> fmt::Display for Player<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type P = Player<Vec<usize>>;

    #[test]
    fn test_identity_not_name() {
        let a = P::human("Bot");
        let b = P::human("Bot");

        assert_ne!(a, b);
        assert_ne!(a.id(), b.id());
        assert_eq!(a.name(), b.name());
    }

    #[test]
    fn test_clone_keeps_identity() {
        let a = P::human("Alice");
        let copy = a.clone();

        assert_eq!(a, copy);
        assert_eq!(a.id(), copy.id());
    }

    #[test]
    fn test_human_has_no_move() {
        let a = P::human("Alice");
        let b = P::human("Bob");

        assert!(!a.is_automatic());
        assert_eq!(a.next_move(&vec![0, 1], &b), None);
    }

    #[test]
    fn test_automatic_move() {
        let bot = P::automatic("Last", |board: &Vec<usize>, _me: &P, _opp: &P| {
            *board.last().unwrap_or(&0)
        });
        let opp = P::human("Bob");

        assert!(bot.is_automatic());
        assert_eq!(bot.next_move(&vec![2, 5], &opp), Some(5));
    }

    #[test]
    fn test_display() {
        let a = P::human("Alice");
        assert_eq!(format!("{}", a), "Alice");
        assert!(format!("{:?}", a).contains("AwaitsInput"));
    }
}
