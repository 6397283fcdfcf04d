//! Controllers: autonomous move sources for a seat.
//!
//! Which player is machine-driven is host policy, not engine state.
//! A controller sees the same read-only [`GameView`] a rendering host
//! sees, and its choice goes back through the same public move path a
//! human move uses.

mod random_ai;

pub use random_ai::{RandomAi, DEFAULT_THINKING_DELAY};

use crate::game::{Coord, GameView};
use anyhow::Result;

/// A source of moves for one player.
#[async_trait::async_trait]
pub trait Controller: Send {
    /// Chooses a target cell for the current player in `view`.
    ///
    /// Only invoked while the view's status is `Playing` and its
    /// legal-target set is non-empty; the no-move case is handled by
    /// the state machine's pass and terminal logic before any
    /// controller runs.
    async fn choose(&mut self, view: &GameView) -> Result<Coord>;

    /// Display name for logs and events.
    fn name(&self) -> &str;
}
