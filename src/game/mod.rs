//! The Nexus Grid engine: board model, capture rules, and the turn
//! state machine. Synchronous and free of I/O; hosts and controllers
//! drive it through [`Game::make_move`] and observe it through
//! [`GameView`].

mod action;
mod board;
mod state;
mod types;

pub mod rules;

pub use action::{Advisory, Move, Notice};
pub use board::Board;
pub use state::{Game, GameView, SIZE};
pub use types::{Cell, Coord, GameStatus, Outcome, Player, Scores};
