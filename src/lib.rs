//! Nexus Grid: an adjacency-capture board game engine.
//!
//! Two players alternate placing pieces on a fixed 6x6 grid. A move is
//! legal only on an empty cell adjacent to at least one opposing
//! piece, and it converts every adjacent opposing piece. A player with
//! no legal move passes automatically; when neither player can move,
//! or the board fills, the higher cell count wins.
//!
//! # Architecture
//!
//! - **Engine** ([`game`]): pure board model, capture rules, and the
//!   turn state machine. Synchronous, no I/O.
//! - **Controllers** ([`players`]): async move sources.
//!   [`players::RandomAi`] is the reference opponent: a fixed thinking
//!   delay, then a uniform-random choice among the legal targets.
//! - **Orchestrator** ([`orchestrator`]): the single actor that
//!   serializes host commands, controller turns, and resets over
//!   channels.
//!
//! # Example
//!
//! ```
//! use nexus_grid::{Advisory, Game, Move, Player};
//!
//! let mut game = Game::new();
//! let target = game.view().legal_targets[0];
//! let advisory = game.make_move(Move::new(Player::One, target));
//! assert_eq!(advisory, Advisory::Accepted);
//! assert_eq!(game.current_player(), Player::Two);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod game;
pub mod orchestrator;
pub mod players;

pub use game::{
    Advisory, Board, Cell, Coord, Game, GameStatus, GameView, Move, Notice, Outcome, Player,
    Scores, SIZE,
};
pub use orchestrator::{Command, Event, Orchestrator, Seat};
pub use players::{Controller, RandomAi};
