//! Core domain types for Nexus Grid.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Player {
    /// Player 1 (moves first).
    One,
    /// Player 2 (moves second).
    Two,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::One => write!(f, "Player 1"),
            Player::Two => write!(f, "Player 2"),
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell occupied by a player.
    Occupied(Player),
}

/// A board coordinate, row-major from the top-left corner.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Coord {
    /// Row index, `0..size`.
    pub row: usize,
    /// Column index, `0..size`.
    pub col: usize,
}

impl Coord {
    /// Creates a new coordinate.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Final result of a finished game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display,
)]
pub enum Outcome {
    /// One player holds more cells than the other.
    #[display("{player} wins with {score} points")]
    Win {
        /// The player with the higher cell count.
        player: Player,
        /// The winner's cell count.
        score: usize,
    },
    /// Both players hold the same number of cells.
    #[display("draw at {one}-{two}")]
    Draw {
        /// Player 1's cell count.
        one: usize,
        /// Player 2's cell count.
        two: usize,
    },
}

/// Current status of the game.
///
/// The only transition is `Playing` to `Over`; nothing leaves `Over`
/// except an explicit reset, which starts a new game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    Playing,
    /// Game ended with the given outcome.
    Over(Outcome),
}

impl GameStatus {
    /// Returns true once the game has ended.
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Over(_))
    }
}

/// Per-player cell counts.
///
/// Always derived from the board; never stored as independent truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    /// Cells held by Player 1.
    pub one: usize,
    /// Cells held by Player 2.
    pub two: usize,
}

impl Scores {
    /// Returns the count for the given player.
    pub fn of(self, player: Player) -> usize {
        match player {
            Player::One => self.one,
            Player::Two => self.two,
        }
    }

    /// Total occupied cells.
    pub fn total(self) -> usize {
        self.one + self.two
    }
}
