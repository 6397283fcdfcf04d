//! Move records and advisory feedback.
//!
//! Moves are first-class domain events: they carry the acting player
//! and the target cell, and are consumed by the state machine without
//! being retained as history.

use super::types::{Coord, Player};
use serde::{Deserialize, Serialize};

/// A move request: a player targeting an empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The targeted cell.
    pub at: Coord,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, at: Coord) -> Self {
        Self { player, at }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.at)
    }
}

/// Verdict of a move attempt.
///
/// Caller mistakes are rejected transitions carrying a reason, never
/// faults: the host keeps rendering a consistent state regardless of
/// misuse.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display,
)]
pub enum Advisory {
    /// The move was applied.
    #[display("move accepted")]
    Accepted,
    /// The acting player is not the current player.
    #[display("not your turn")]
    NotYourTurn,
    /// The target cell already holds a piece.
    #[display("cell is already occupied")]
    Occupied,
    /// The target captures nothing; a move must capture at least one
    /// opposing piece.
    #[display("must capture at least one opposing piece")]
    NoCapture,
    /// A deferred opponent choice is pending; no move is accepted
    /// until it lands or is invalidated.
    #[display("opponent is thinking")]
    AiBusy,
    /// The game has ended; only a reset changes state now.
    #[display("the game is over")]
    GameOver,
}

impl Advisory {
    /// Returns true when the move was applied.
    pub fn is_accepted(self) -> bool {
        self == Advisory::Accepted
    }
}

/// Pending informational message surfaced to the acting side.
///
/// Cleared by the next accepted move and by reset.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display,
)]
pub enum Notice {
    /// A player had no legal move and the turn passed automatically.
    #[display("{player} has no legal move, the turn passes")]
    Passed {
        /// The player who could not move.
        player: Player,
    },
    /// The last move attempt was rejected.
    #[display("{_0}")]
    Rejected(Advisory),
}
